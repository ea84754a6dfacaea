//! Immutable listing entities built from decoded tag records.

mod address;
mod amenity;
mod company;
mod deposit;
mod fees;
mod pet;
mod property;
mod range;
mod unit;

pub use address::Address;
pub use amenity::Amenity;
pub use company::Company;
pub use deposit::Deposit;
pub use fees::Fees;
pub use pet::{Pet, PetPolicy};
pub use property::Property;
pub use range::{deposit_amount, unit_sqft, DepositAmount, NumericRange};
pub use unit::Unit;
