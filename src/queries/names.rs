//! Name queries: the paged names list, single-name lookup, and the virtual
//! page synthesizer.

use serde::Deserialize;
use serde_json::json;

use crate::error::{DomaError, Result};
use crate::models::{Name, NameRef, Page, VirtualNameItem, VirtualNamePage};
use crate::transport::{request, Transport};

const GET_NAMES: &str = r#"
    query GetNames($take: Int!, $skip: Int!) {
      names(take: $take, skip: $skip) {
        items {
          name
        }
        totalCount
      }
    }
"#;

const GET_DOMAIN_INFO: &str = r#"
    query GetDomainInfo($name: String!) {
      name(name: $name) {
        name
        expiresAt
        tokenizedAt
        registrar {
          name
          websiteUrl
        }
        nameservers {
          ldhName
        }
        claimedBy
      }
    }
"#;

#[derive(Debug, Deserialize)]
struct NamesData {
    names: Page<NameRef>,
}

#[derive(Debug, Deserialize)]
struct NameDetailData {
    name: Option<Name>,
}

// ---------------------------------------------------------------------------
// ListNamesParams
// ---------------------------------------------------------------------------

/// Parameters for the names list. The filter is applied client-side: the
/// upstream query has no substring argument.
#[derive(Debug, Clone, Default)]
pub struct ListNamesParams {
    pub take: i64,
    pub skip: i64,
    pub filter: Option<String>,
}

// ---------------------------------------------------------------------------
// NameQuery
// ---------------------------------------------------------------------------

/// Query interface for registry names.
pub struct NameQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> NameQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    // -- Paged list --------------------------------------------------------

    /// List names with the upstream page size and offset.
    ///
    /// When a substring filter is set, non-matching items are dropped from
    /// the returned page (case-insensitive); the claimed total count is
    /// reported as-is. Never returns more than `take` items.
    pub fn list(&self, params: &ListNamesParams) -> Result<Page<NameRef>> {
        if params.take < 0 || params.skip < 0 {
            return Err(DomaError::InvalidArgument(
                "take and skip must be non-negative".into(),
            ));
        }

        let data: NamesData = request(
            self.transport,
            GET_NAMES,
            json!({ "take": params.take, "skip": params.skip }),
        )?;

        let mut page = data.names;
        if let Some(ref filter) = params.filter {
            let needle = filter.trim().to_lowercase();
            if !needle.is_empty() {
                page.items
                    .retain(|n| n.name.to_lowercase().contains(&needle));
            }
        }
        page.items.truncate(params.take as usize);
        Ok(page)
    }

    // -- Single name lookup ------------------------------------------------

    /// Look up a single name.
    ///
    /// An upstream "Name not found" condition (a null payload or a GraphQL
    /// not-found error) is a valid empty result, not an error.
    pub fn get(&self, name: &str) -> Result<Option<Name>> {
        let result: Result<NameDetailData> =
            request(self.transport, GET_DOMAIN_INFO, json!({ "name": name }));

        match result {
            Ok(data) => Ok(data.name),
            Err(DomaError::Graphql(msg)) if msg.contains("Name not found") => Ok(None),
            Err(e) => Err(e),
        }
    }

    // -- Virtual paging ----------------------------------------------------

    /// List names as a synthesized virtual page.
    ///
    /// The upstream API returns the same bounded page regardless of the
    /// requested offset, while claiming a much larger total count. This
    /// method makes pagination controls appear to work across that claimed
    /// total by cyclically repeating the real page: virtual item `offset + i`
    /// maps to real item `(offset + i) % real.len()`, and repeats beyond the
    /// real page are tagged `original = false`.
    ///
    /// This is a documented workaround for an upstream limitation, not a
    /// correctness guarantee -- counts beyond the first page do not
    /// correspond to distinct records. Prefer [`list`](Self::list) unless the
    /// illusion of a full page set is required.
    pub fn list_virtual(&self, limit: usize, offset: usize) -> Result<VirtualNamePage> {
        let data: NamesData = request(
            self.transport,
            GET_NAMES,
            json!({ "take": limit as i64, "skip": offset as i64 }),
        )?;

        let real = data.names.items;
        let total = data.names.total_count.max(0) as usize;

        if real.is_empty() || offset >= total {
            return Ok(VirtualNamePage {
                items: Vec::new(),
                total_count: total as i64,
                has_next: false,
            });
        }

        let mut items = Vec::new();
        for i in 0..limit {
            let virtual_index = offset + i;
            if virtual_index >= total {
                break;
            }
            let source = &real[virtual_index % real.len()];
            items.push(VirtualNameItem {
                name: source.name.clone(),
                virtual_index,
                original: virtual_index < real.len(),
            });
        }

        let has_next = offset + items.len() < total;
        Ok(VirtualNamePage {
            items,
            total_count: total as i64,
            has_next,
        })
    }
}
