pub(crate) mod notify;
