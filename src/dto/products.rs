use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
}
