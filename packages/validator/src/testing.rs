//! Session fixtures for unit tests

use crate::session::{Session, SessionSettings, Target};
use automotion_common::{MockElement, MockPage};

pub fn single<'d>(page: &'d MockPage, root: &MockElement) -> Session<'d, MockPage> {
    Session::open(
        page,
        Target::Single {
            element: root.clone(),
            name: "Root".to_string(),
        },
        SessionSettings::default(),
    )
}

pub fn chunk<'d>(page: &'d MockPage, elements: &[MockElement]) -> Session<'d, MockPage> {
    Session::open(
        page,
        Target::Chunk {
            elements: elements.to_vec(),
        },
        SessionSettings::default(),
    )
}
