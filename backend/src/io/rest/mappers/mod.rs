pub mod donor_mapper;
