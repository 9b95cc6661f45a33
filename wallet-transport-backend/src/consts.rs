pub const BASE_URL: &str = "http://api.wallet.net";

pub mod endpoint {
    pub mod payment_account {
        // 分页查询收款账户
        pub const PAYMENT_ACCOUNT_PAGE: &str = "payment/account/page";

        // 设置默认收款账户
        pub const PAYMENT_ACCOUNT_SET_DEFAULT: &str = "payment/account/setDefault";

        // 解绑收款账户
        pub const PAYMENT_ACCOUNT_UNBIND: &str = "payment/account/unbind";
    }
}

pub mod code {
    pub const ACCOUNT_NOT_FOUND: &str = "4004";
}
