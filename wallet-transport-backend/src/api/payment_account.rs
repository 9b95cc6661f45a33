use crate::{
    consts::endpoint::payment_account::{
        PAYMENT_ACCOUNT_PAGE, PAYMENT_ACCOUNT_SET_DEFAULT, PAYMENT_ACCOUNT_UNBIND,
    },
    request::{PaymentAccountIdReq, PaymentAccountPageReq},
    response_vo::payment_account::PaymentAccountPage,
};

use super::BackendApi;

impl BackendApi {
    pub async fn payment_account_page(
        &self,
        req: &PaymentAccountPageReq,
    ) -> Result<PaymentAccountPage, crate::Error> {
        self.post_request(PAYMENT_ACCOUNT_PAGE, req).await
    }

    pub async fn payment_account_set_default(&self, id: &str) -> Result<(), crate::Error> {
        let req = PaymentAccountIdReq::new(id);
        self.post_request::<_, Option<()>>(PAYMENT_ACCOUNT_SET_DEFAULT, &req).await?;
        Ok(())
    }

    pub async fn payment_account_unbind(&self, id: &str) -> Result<(), crate::Error> {
        let req = PaymentAccountIdReq::new(id);
        self.post_request::<_, Option<()>>(PAYMENT_ACCOUNT_UNBIND, &req).await?;
        Ok(())
    }
}
