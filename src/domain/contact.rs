use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn new(phone: String, email: String, address: String) -> Self {
        Contact {
            phone,
            email,
            address,
        }
    }
}
