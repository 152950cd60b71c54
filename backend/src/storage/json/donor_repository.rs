use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::fs;
use uuid::Uuid;

use shared::{BloodType, Donor as DonorDocument};

use super::connection::JsonConnection;
use crate::domain::models::donor::{Donor, NewDonor};
use crate::io::rest::mappers::donor_mapper::DonorMapper;
use crate::storage::traits::DonorStorage;

/// Donor repository backed by one JSON document per donor.
///
/// Updates are load-modify-write on a single document; concurrent writers are
/// last-write-wins, which matches the directory contract.
#[derive(Clone)]
pub struct JsonDonorRepository {
    connection: JsonConnection,
}

impl JsonDonorRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load_document(&self, donor_id: &str) -> Result<Option<DonorDocument>> {
        let path = self.connection.donor_document_path(donor_id);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read donor document {}", path.display()))?;
        let document: DonorDocument = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse donor document {}", path.display()))?;

        Ok(Some(document))
    }

    /// Write a donor document atomically via temp file + rename
    fn save_document(&self, document: &DonorDocument) -> Result<()> {
        let path = self.connection.donor_document_path(&document.id);
        let contents = serde_json::to_string_pretty(document)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved donor document {}", path.display());
        Ok(())
    }

    /// Scan every donor document, skipping files that do not parse.
    ///
    /// Returned in creation order (`created_at`, then id) so queries are
    /// deterministic across filesystems.
    fn scan_donors(&self) -> Result<Vec<Donor>> {
        let donors_dir = self.connection.donors_directory();
        if !donors_dir.exists() {
            return Ok(Vec::new());
        }

        let mut donors = Vec::new();
        for entry in fs::read_dir(&donors_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            let document: DonorDocument = match serde_json::from_str(&contents) {
                Ok(document) => document,
                Err(e) => {
                    warn!("Skipping invalid donor document {}: {}", path.display(), e);
                    continue;
                }
            };

            match DonorMapper::to_domain(document) {
                Ok(donor) => donors.push(donor),
                Err(e) => {
                    warn!("Skipping unmappable donor document {}: {}", path.display(), e);
                }
            }
        }

        donors.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(donors)
    }
}

#[async_trait]
impl DonorStorage for JsonDonorRepository {
    async fn create_donor(&self, donor: &NewDonor) -> Result<Donor> {
        let stored = Donor {
            id: Uuid::new_v4().to_string(),
            name: donor.name.clone(),
            blood_type: donor.blood_type,
            district: donor.district.clone(),
            contact_number: donor.contact_number.clone(),
            last_donation_date: donor.last_donation_date,
            next_eligible_date: donor.next_eligible_date,
            created_at: Utc::now(),
        };

        self.save_document(&DonorMapper::to_dto(stored.clone()))?;
        info!("Created donor document {}", stored.id);

        Ok(stored)
    }

    async fn get_donor(&self, donor_id: &str) -> Result<Option<Donor>> {
        match self.load_document(donor_id)? {
            Some(document) => Ok(Some(DonorMapper::to_domain(document)?)),
            None => Ok(None),
        }
    }

    async fn query_by_district_and_blood_type(
        &self,
        district: &str,
        blood_type: BloodType,
    ) -> Result<Vec<Donor>> {
        let matches: Vec<Donor> = self
            .scan_donors()?
            .into_iter()
            .filter(|donor| donor.district == district && donor.blood_type == blood_type)
            .collect();

        debug!(
            "Query district={} blood_type={} matched {} donors",
            district,
            blood_type,
            matches.len()
        );

        Ok(matches)
    }

    async fn update_donation_dates(
        &self,
        donor_id: &str,
        last_donation_date: DateTime<Utc>,
        next_eligible_date: DateTime<Utc>,
    ) -> Result<()> {
        let mut document = self
            .load_document(donor_id)?
            .ok_or_else(|| anyhow::anyhow!("Donor not found: {}", donor_id))?;

        document.last_donation_date = Some(last_donation_date.to_rfc3339());
        document.next_eligible_date = Some(next_eligible_date.to_rfc3339());

        self.save_document(&document)?;
        info!("Updated donation dates for donor {}", donor_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use tempfile::TempDir;

    fn setup_test_repo() -> (JsonDonorRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (JsonDonorRepository::new(connection), temp_dir)
    }

    fn new_donor(name: &str, district: &str, blood_type: BloodType) -> NewDonor {
        NewDonor {
            name: name.to_string(),
            blood_type,
            district: district.to_string(),
            contact_number: "+911234567890".to_string(),
            last_donation_date: None,
            next_eligible_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_created_at() {
        let (repo, _temp_dir) = setup_test_repo();
        let before = Utc::now();

        let donor = repo
            .create_donor(&new_donor("Ravi", "Chennai", BloodType::APositive))
            .await
            .expect("Failed to create donor");

        assert!(!donor.id.is_empty());
        assert!(donor.created_at >= before);

        let retrieved = repo
            .get_donor(&donor.id)
            .await
            .expect("Failed to get donor")
            .expect("Donor should exist");
        assert_eq!(retrieved, donor);
    }

    #[tokio::test]
    async fn test_get_missing_donor_returns_none() {
        let (repo, _temp_dir) = setup_test_repo();
        let result = repo.get_donor("no-such-id").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_query_matches_both_fields_exactly() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.create_donor(&new_donor("Match", "Chennai", BloodType::APositive))
            .await
            .unwrap();
        repo.create_donor(&new_donor("Wrong district", "Madurai", BloodType::APositive))
            .await
            .unwrap();
        repo.create_donor(&new_donor("Wrong type", "Chennai", BloodType::ONegative))
            .await
            .unwrap();
        // Case-sensitive: "chennai" is not "Chennai"
        repo.create_donor(&new_donor("Wrong case", "chennai", BloodType::APositive))
            .await
            .unwrap();

        let matches = repo
            .query_by_district_and_blood_type("Chennai", BloodType::APositive)
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Match");
    }

    #[tokio::test]
    async fn test_update_merges_only_donation_dates() {
        let (repo, _temp_dir) = setup_test_repo();

        let donor = repo
            .create_donor(&new_donor("Ravi", "Chennai", BloodType::BPositive))
            .await
            .unwrap();

        let donated_at = Utc::now();
        let release = donated_at + Days::new(63);
        repo.update_donation_dates(&donor.id, donated_at, release)
            .await
            .expect("Failed to update donation dates");

        let updated = repo.get_donor(&donor.id).await.unwrap().unwrap();
        assert_eq!(
            updated.last_donation_date.unwrap().to_rfc3339(),
            donated_at.to_rfc3339()
        );
        assert_eq!(
            updated.next_eligible_date.unwrap().to_rfc3339(),
            release.to_rfc3339()
        );
        // Untouched fields survive the merge
        assert_eq!(updated.name, donor.name);
        assert_eq!(updated.district, donor.district);
        assert_eq!(
            updated.created_at.to_rfc3339(),
            donor.created_at.to_rfc3339()
        );
    }

    #[tokio::test]
    async fn test_update_unknown_donor_fails() {
        let (repo, _temp_dir) = setup_test_repo();
        let now = Utc::now();

        let result = repo
            .update_donation_dates("missing", now, now + Days::new(63))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_scan_skips_invalid_documents() {
        let (repo, temp_dir) = setup_test_repo();

        repo.create_donor(&new_donor("Valid", "Chennai", BloodType::APositive))
            .await
            .unwrap();
        fs::write(
            temp_dir.path().join("donors").join("broken.json"),
            "not json",
        )
        .unwrap();

        let matches = repo
            .query_by_district_and_blood_type("Chennai", BloodType::APositive)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
    }
}
