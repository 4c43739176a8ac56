use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
