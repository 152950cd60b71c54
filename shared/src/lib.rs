use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel value the district picker shows before the user selects anything.
/// A registration or search carrying this value is treated as "no district chosen".
pub const UNSELECTED_DISTRICT: &str = "Select district";

/// The eight ABO/Rh blood groups a donor can register under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodType {
    /// All blood types in picker order.
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::OPositive,
        BloodType::ONegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
    ];

    /// The label shown in pickers and stored in donor documents ("A+", "AB-", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseBloodTypeError(pub String);

impl fmt::Display for ParseBloodTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown blood type: {}", self.0)
    }
}

impl std::error::Error for ParseBloodTypeError {}

impl FromStr for BloodType {
    type Err = ParseBloodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodType::ALL
            .iter()
            .copied()
            .find(|bt| bt.as_str() == s)
            .ok_or_else(|| ParseBloodTypeError(s.to_string()))
    }
}

/// A registered donor as stored in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub blood_type: BloodType,
    pub district: String,
    pub contact_number: String,
    /// Most recent donation timestamp (RFC 3339), absent if the donor never donated
    pub last_donation_date: Option<String>,
    /// Earliest timestamp the donor may donate again (RFC 3339), always 63 days
    /// after `last_donation_date`; absent exactly when that field is absent
    pub next_eligible_date: Option<String>,
    /// Set by the directory when the donor document is created (RFC 3339)
    pub created_at: String,
}

/// Registration form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterDonorRequest {
    pub name: String,
    pub blood_type: BloodType,
    pub district: String,
    pub contact_number: String,
    /// Optional last donation date as typed into the form; empty or absent
    /// means "never donated". Accepts RFC 3339 or bare YYYY-MM-DD.
    pub last_donation_date: Option<String>,
}

/// Response after registering a donor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterDonorResponse {
    pub donor: Donor,
    pub success_message: String,
}

/// Search form payload: exact-match district and blood type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDonorsRequest {
    pub district: String,
    pub blood_type: BloodType,
}

/// One row of search results, ranked eligible-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorView {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    pub last_donation_date: Option<String>,
    pub next_eligible_date: Option<String>,
    /// Whether the donor may donate at the time the search ran
    pub eligible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDonorsResponse {
    pub donors: Vec<DonorView>,
}

/// Response after marking a donor as having donated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDonationResponse {
    pub donor: Donor,
    pub success_message: String,
}
