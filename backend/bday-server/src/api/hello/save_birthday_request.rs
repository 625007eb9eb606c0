use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveBirthdayRequest {
    /// `YYYY-MM-DD`, strictly before today
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
}
