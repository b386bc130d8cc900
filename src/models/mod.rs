pub mod certificate;
pub mod company;
pub mod equipment;
pub mod reminder;
pub mod role;
pub mod scope;
pub mod ticket;
