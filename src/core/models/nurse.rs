use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX_LENGTH: usize = 255;
pub const LICENSE_NUMBER_MAX_LENGTH: usize = 50;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Nurse {
    pub id: i64,
    pub name: String,
    pub license_number: String,
    #[serde(with = "calendar_date")]
    #[schema(value_type = String, format = Date, example = "1990-05-01")]
    pub dob: NaiveDate,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw, untrusted field values as they arrive on the wire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NurseFields {
    pub name: Option<String>,
    pub license_number: Option<String>,
    pub dob: Option<String>,
    pub age: Option<String>,
}

/// A validated create payload. Identity and timestamps are assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewNurse {
    pub name: String,
    pub license_number: String,
    pub dob: NaiveDate,
    pub age: i32,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NurseUpdate {
    pub name: Option<String>,
    pub license_number: Option<String>,
    pub dob: Option<NaiveDate>,
    pub age: Option<i32>,
}

impl NurseUpdate {
    pub fn apply_to(self, nurse: &mut Nurse) {
        if let Some(name) = self.name {
            nurse.name = name;
        }
        if let Some(license_number) = self.license_number {
            nurse.license_number = license_number;
        }
        if let Some(dob) = self.dob {
            nurse.dob = dob;
        }
        if let Some(age) = self.age {
            nurse.age = age;
        }
    }
}

/// Timestamp for the next write of a row last touched at `previous`.
/// Always strictly later than `previous`, even if the clock has not advanced.
pub fn next_update_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Parses `2020-05-01` as well as `2020-05-01T00:00:00Z`, keeping only the calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid calendar date: {}", raw)))
    }
}
