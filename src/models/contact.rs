use std::fmt;

/// A client joined with one of their phones.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ClientContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl fmt::Display for ClientContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}> {}", self.first_name, self.last_name, self.email, self.phone)
    }
}

/// One row of a client search. Phone columns are empty for a client with no phones.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ClientPhoneRow {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_id: Option<i32>,
    pub phone: Option<String>,
}

impl fmt::Display for ClientPhoneRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} <{}> {}",
            self.client_id,
            self.first_name,
            self.last_name,
            self.email,
            self.phone.as_deref().unwrap_or("-")
        )
    }
}
