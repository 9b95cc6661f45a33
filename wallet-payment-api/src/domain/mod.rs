pub mod payment_account;
