mod one_buck;
pub use one_buck::OneBuckMintClient;
