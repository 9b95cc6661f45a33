pub use wallet_transport_backend::PayType;
use wallet_transport_backend::{PaymentAccountInfo, PaymentAccountPage};

/// 单个收款账户 (银行卡 / 支付宝 / 微信)
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: String,
    pub pay_type: PayType,
    pub real_name: String,
    pub account_no: String,
    pub bank_name: Option<String>,
    pub bank_branch: Option<String>,
    pub qr_code: Option<String>,
    pub is_default: bool,
}

impl AccountRecord {
    /// Keeps the last four characters, e.g. `************2233`.
    pub fn masked_account_no(&self) -> String {
        let chars: Vec<char> = self.account_no.chars().collect();
        if chars.len() <= 4 {
            return self.account_no.clone();
        }
        let hidden = chars.len() - 4;
        std::iter::repeat('*')
            .take(hidden)
            .chain(chars[hidden..].iter().copied())
            .collect()
    }
}

impl From<PaymentAccountInfo> for AccountRecord {
    fn from(value: PaymentAccountInfo) -> Self {
        Self {
            id: value.id,
            pay_type: value.pay_type,
            real_name: value.real_name,
            account_no: value.account_no,
            bank_name: value.bank_name,
            bank_branch: value.bank_branch,
            qr_code: value.qr_code,
            is_default: value.is_default,
        }
    }
}

/// 收款账户列表, 分页字段与后端保持一致
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    pub records: Vec<AccountRecord>,
    pub total: i64,
    pub size: i64,
    pub current: i64,
    pub pages: i64,
}

impl From<PaymentAccountPage> for AccountModel {
    fn from(value: PaymentAccountPage) -> Self {
        Self {
            records: value.records.into_iter().map(Into::into).collect(),
            total: value.total,
            size: value.size,
            current: value.current,
            pages: value.pages,
        }
    }
}

impl AccountModel {
    pub fn find(&self, id: &str) -> Option<&AccountRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn default_account(&self) -> Option<&AccountRecord> {
        self.records.iter().find(|r| r.is_default)
    }

    /// Marks `id` as the only default record. Returns `None` when `id` is unknown,
    /// in which case nothing changes.
    pub fn mark_default(&mut self, id: &str) -> Option<&AccountRecord> {
        if !self.contains(id) {
            return None;
        }
        for record in self.records.iter_mut() {
            record.is_default = record.id == id;
        }
        self.find(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<AccountRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        self.total = (self.total - 1).max(0);
        Some(removed)
    }

    pub fn has_more(&self) -> bool {
        (self.records.len() as i64) < self.total
    }

    /// Page holding the first record not loaded yet. Counted from the loaded
    /// records rather than `current`: an unbind shifts every later record one
    /// slot back on the server.
    pub fn next_page(&self, size: i64) -> i64 {
        self.records.len() as i64 / size.max(1) + 1
    }

    /// Appends a page, skipping records already present, and returns how many
    /// were added. A page that adds nothing ends paging.
    pub fn append_page(&mut self, page: AccountModel) -> usize {
        let before = self.records.len();
        for record in page.records {
            if !self.contains(&record.id) {
                self.records.push(record);
            }
        }
        let added = self.records.len() - before;

        self.total = if added == 0 { self.records.len() as i64 } else { page.total };
        self.size = page.size;
        self.current = page.current;
        self.pages = page.pages;
        added
    }
}
