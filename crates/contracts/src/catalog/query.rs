/// Query parameters for one products request.
///
/// All filtering is server-side; the client only assembles the query
/// string. `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub page: u32,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl CatalogQuery {
    pub fn first_page() -> Self {
        Self {
            page: 1,
            vendor: None,
            category: None,
            status: None,
        }
    }

    /// Render as a query string: `page` always, optional parameters only
    /// when set, values percent-encoded. Parameter order is fixed as
    /// page, vendor, category, status.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![format!("page={}", self.page)];

        if let Some(vendor) = &self.vendor {
            params.push(format!("vendor={}", urlencoding::encode(vendor)));
        }
        if let Some(category) = &self.category {
            params.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(status) = &self.status {
            params.push(format!("status={}", urlencoding::encode(status)));
        }

        params.join("&")
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::first_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_only() {
        assert_eq!(CatalogQuery::first_page().to_query_string(), "page=1");
    }

    #[test]
    fn test_vendor_always_included_when_set() {
        let mut query = CatalogQuery::first_page();
        query.vendor = Some("GreenMart".to_string());
        assert_eq!(query.to_query_string(), "page=1&vendor=GreenMart");

        query.page = 4;
        query.category = Some("Snacks".to_string());
        assert_eq!(
            query.to_query_string(),
            "page=4&vendor=GreenMart&category=Snacks"
        );
    }

    #[test]
    fn test_values_percent_encoded() {
        let query = CatalogQuery {
            page: 2,
            vendor: None,
            category: Some("Sauces & Spreads".to_string()),
            status: None,
        };
        assert_eq!(
            query.to_query_string(),
            "page=2&category=Sauces%20%26%20Spreads"
        );
    }

    #[test]
    fn test_fixed_parameter_order() {
        let query = CatalogQuery {
            page: 3,
            vendor: Some("Vegan Vault".to_string()),
            category: Some("Drinks".to_string()),
            status: Some("non_vegan".to_string()),
        };
        assert_eq!(
            query.to_query_string(),
            "page=3&vendor=Vegan%20Vault&category=Drinks&status=non_vegan"
        );
    }
}
