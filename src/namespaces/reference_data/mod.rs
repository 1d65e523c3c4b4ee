//! `/v1/reference-data` namespace.

pub mod locations;

pub use locations::Locations;

use crate::client::Client;

#[derive(Clone)]
pub struct ReferenceData<'a> {
    client: &'a Client,
}

impl<'a> ReferenceData<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn locations(&self) -> Locations<'a> {
        Locations::new(self.client)
    }
}
