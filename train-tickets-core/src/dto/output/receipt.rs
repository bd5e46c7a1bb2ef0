use crate::store::{self, Section, Ticket};
use serde::{Deserialize, Serialize};

///
/// Proof of allocation returned after purchase, reseat and on request
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub from: String,
    pub to: String,
    pub user: Passenger,
    pub price_paid: u32,
    pub seat: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub section: Section,
    pub seat_number: i32,
}

impl From<store::Passenger> for Passenger {
    fn from(value: store::Passenger) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

impl From<store::Seat> for Seat {
    fn from(value: store::Seat) -> Self {
        Self {
            section: value.section,
            seat_number: value.seat_number,
        }
    }
}

impl From<Ticket> for Receipt {
    fn from(value: Ticket) -> Self {
        Self {
            from: value.from,
            to: value.to,
            user: value.passenger.into(),
            price_paid: value.price_paid,
            seat: value.seat.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn receipt_json_serialize_ok() {
        let receipt = Receipt {
            from: "London".to_string(),
            to: "France".to_string(),
            user: Passenger {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@example.com".to_string(),
            },
            price_paid: 2000,
            seat: Seat {
                section: Section::B,
                seat_number: 7,
            },
        };

        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(
            json,
            json!({
                "from": "London",
                "to": "France",
                "user": {
                    "first_name": "John",
                    "last_name": "Doe",
                    "email": "john@example.com",
                },
                "price_paid": 2000,
                "seat": {
                    "section": "B",
                    "seat_number": 7,
                },
            })
        );
        assert_eq!(serde_json::from_value::<Receipt>(json).unwrap(), receipt);
    }

    #[test]
    fn receipt_json_deserialize_unknown_section() {
        let json: Value = json!({
            "from": "London",
            "to": "France",
            "user": { "first_name": "John", "last_name": "Doe", "email": "john@example.com" },
            "price_paid": 2000,
            "seat": { "section": "C", "seat_number": 7 },
        });

        assert!(serde_json::from_value::<Receipt>(json).is_err());
    }
}
