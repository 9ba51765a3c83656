pub mod currency;
pub mod subsidy;
