//! Fetch request sub-converter
//!
//! Field-by-field mapping between the domain fetch request and its wire
//! representation. The nested auth is delegated to the auth sub-converter.

use std::sync::Arc;

use sextant_api::catalog::model as graphql;

use crate::model::FetchRequest;

use super::{AuthConverter, FetchRequestConverter};

pub struct DefaultFetchRequestConverter {
    auth: Arc<dyn AuthConverter>,
}

impl DefaultFetchRequestConverter {
    pub fn new(auth: Arc<dyn AuthConverter>) -> Self {
        Self { auth }
    }
}

impl FetchRequestConverter for DefaultFetchRequestConverter {
    fn to_graphql(&self, fetch_request: Option<&FetchRequest>) -> Option<graphql::FetchRequest> {
        let fetch_request = fetch_request?;
        Some(graphql::FetchRequest {
            url: fetch_request.url.clone(),
            auth: self.auth.to_graphql(fetch_request.auth.as_ref()),
            mode: fetch_request.mode.into(),
            filter: fetch_request.filter.clone(),
        })
    }

    fn input_from_graphql(&self, input: Option<&graphql::FetchRequest>) -> Option<FetchRequest> {
        let input = input?;
        Some(FetchRequest {
            url: input.url.clone(),
            auth: self.auth.input_from_graphql(input.auth.as_ref()),
            mode: input.mode.into(),
            filter: input.filter.clone(),
        })
    }
}
