//! Static label vocabulary used to compose synthetic complaints.
//!
//! Departments and their canned issue phrases, plus the location, duration
//! and closing-remark pools that every complaint sentence is built from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Civic-service department a complaint is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Fire Department")]
    Fire,
    #[serde(rename = "Electricity Department")]
    Electricity,
    #[serde(rename = "Water Department")]
    Water,
    #[serde(rename = "Cleaning Department")]
    Cleaning,
    #[serde(rename = "Public Works Department")]
    PublicWorks,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Fire,
        Department::Electricity,
        Department::Water,
        Department::Cleaning,
        Department::PublicWorks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Fire => "Fire Department",
            Department::Electricity => "Electricity Department",
            Department::Water => "Water Department",
            Department::Cleaning => "Cleaning Department",
            Department::PublicWorks => "Public Works Department",
        }
    }

    /// Exact match on the serialized name. Callers that accept padded input trim first.
    pub fn from_label(label: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|d| d.as_str() == label)
    }

    /// Canned issue phrases reported to this department.
    pub fn issues(self) -> &'static [&'static str] {
        match self {
            Department::Fire => &[
                "There is a fire in a house",
                "A shop caught fire",
                "Gas cylinder is leaking",
                "Smoke coming from a building",
                "Vehicle is on fire",
                "Electrical fire near a pole",
            ],
            Department::Electricity => &[
                "Street light is not working",
                "There is a power outage",
                "Electric pole is damaged",
                "Loose electric wire hanging",
                "Short circuit near transformer",
                "Transformer making loud noise",
            ],
            Department::Water => &[
                "Water leakage on the road",
                "Pipe burst near houses",
                "No water supply in area",
                "Dirty water coming from taps",
                "Very low water pressure",
                "Water tank overflowing",
            ],
            Department::Cleaning => &[
                "Garbage not collected",
                "Dustbin overflowing",
                "Dead animal on road",
                "Garbage burning",
                "Bad smell from waste",
                "Street is very dirty",
            ],
            Department::PublicWorks => &[
                "Pothole on the road",
                "Road is broken",
                "Footpath damaged",
                "Road blocked by debris",
                "Tree fallen on road",
                "Manhole left open",
            ],
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized names of every department, in declaration order.
pub const VALID_DEPARTMENTS: [&str; 5] = [
    "Fire Department",
    "Electricity Department",
    "Water Department",
    "Cleaning Department",
    "Public Works Department",
];

pub const LOCATIONS: [&str; 6] = [
    "near the bus stop",
    "in our residential area",
    "near the school",
    "on the main road",
    "near the market",
    "in front of our house",
];

pub const TIME_PHRASES: [&str; 5] = [
    "for the past two days",
    "since last week",
    "for more than a month",
    "since yesterday",
    "for several days",
];

pub const CLOSING_REMARKS: [&str; 5] = [
    "This is causing inconvenience to residents.",
    "Vehicles are finding it difficult to pass.",
    "Children are playing nearby which is risky.",
    "This is very dangerous and needs urgent attention.",
    "People are complaining about this issue.",
];
