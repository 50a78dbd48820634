//! College records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, Record};

/// A registered college
///
/// `college_code` and `email` are unique across the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub college_id: Id,
    pub college_name: String,
    pub college_code: String,
    pub city: String,
    pub state: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Record for College {
    const COLLECTION: &'static str = "colleges";
    const ENTITY: &'static str = "College";

    fn id(&self) -> Id {
        self.college_id
    }
}

/// Registration data for a new college
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCollege {
    pub college_name: String,
    pub college_code: String,
    pub city: String,
    pub state: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

impl NewCollege {
    pub(crate) fn into_record(self, college_id: Id, created_at: DateTime<Utc>) -> College {
        College {
            college_id,
            college_name: self.college_name,
            college_code: self.college_code,
            city: self.city,
            state: self.state,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            created_at,
        }
    }
}
