pub mod controller;
pub mod index;
pub mod roster;
pub mod store;

pub use crate::domain::model::{Candidate, DormMap, Dormitory, Gender, IdentityKey, Student};
pub use crate::domain::ports::{ConfigProvider, RosterView, StateStore};
pub use crate::utils::error::Result;
