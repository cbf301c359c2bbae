pub mod assertions;
pub mod network;
pub mod permit;
pub mod scenarios;
pub mod snapshot;
pub mod test_fixture;
