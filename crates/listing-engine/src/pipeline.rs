//! The listing pipeline
//!
//! Orchestrates one listing request: compose the base query over the
//! parent's children, let the config's query hook and the injected
//! filters narrow it, apply the fixed ordering, paginate, then run
//! the per-row transform that turns stored option codes into display
//! labels.

use crate::filter::Filter;
use crate::options::{OptionMap, OptionResolver};
use crate::Result;
use listing_config::{HookRegistry, ListingConfig};
use listing_model::{
    FieldSource, FieldValue, OrderBy, Page, RequestParams, ResourceNode, ResourceQuery,
    ResourceStore, Row,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Delimiter between stored multi-values
pub const VALUE_DELIMITER: &str = "||";

/// Separator between display labels
pub const LABEL_SEPARATOR: &str = ", ";

/// Executes listing requests against the injected collaborators
pub struct ListingPipeline {
    store: Arc<dyn ResourceStore>,
    fields: Arc<dyn FieldSource>,
    hooks: Arc<HookRegistry>,
    filters: Vec<Box<dyn Filter>>,
}

impl ListingPipeline {
    /// Create a pipeline with no filters
    pub fn new(
        store: Arc<dyn ResourceStore>,
        fields: Arc<dyn FieldSource>,
        hooks: Arc<HookRegistry>,
    ) -> Self {
        Self {
            store,
            fields,
            hooks,
            filters: Vec::new(),
        }
    }

    /// Inject the ordered filter list applied to every request
    pub fn with_filters(mut self, filters: Vec<Box<dyn Filter>>) -> Self {
        self.filters = filters;
        self
    }

    /// List one page of a parent's children under a resolved config
    ///
    /// Ordering is fixed (folders before documents, then by
    /// menuindex ascending) and is applied after the filters so they
    /// cannot override it. The page size comes from the request's
    /// limit selection when `config.limits` allows it, else from
    /// `config.default_limit`.
    pub fn list(
        &self,
        parent: &ResourceNode,
        config: &ListingConfig,
        params: &RequestParams,
    ) -> Result<Page<Row>> {
        let names = config.column_names();
        let options = OptionResolver::new(Arc::clone(&self.fields)).resolve(&names)?;

        let mut query = ResourceQuery::children_of(parent.id).with_fields(names.clone());

        if let Some(name) = &config.query {
            match self.hooks.query(name) {
                Some(hook) => hook(&mut query),
                None => {
                    tracing::warn!(hook = %name, "Configured query hook is not registered");
                }
            }
        }

        for filter in &self.filters {
            filter.apply(&mut query, &names, params);
        }

        query.order_by(vec![
            OrderBy::descending("isfolder"),
            OrderBy::ascending("menuindex"),
        ]);

        let page = params.page.max(1);
        let per_page = config.page_size(params.limit);
        let total = self.store.count(&query)?;
        query.window((page - 1) * per_page, per_page);

        let mut items = Vec::new();
        for row in self.store.select(&query)? {
            if let Some(row) = self.transform(row, config, &names, &options) {
                items.push(row);
            }
        }

        tracing::debug!(
            listing = %config.id,
            page,
            per_page,
            total,
            rows = items.len(),
            "Listed resources"
        );

        Ok(Page::new(items, page, per_page, total).appends(params))
    }

    /// The per-row transform: prepare hook, then option mapping
    ///
    /// Returns `None` when the prepare hook drops the row. A dropped
    /// or untransformable row never fails the page.
    fn transform(
        &self,
        row: Row,
        config: &ListingConfig,
        names: &[String],
        options: &HashMap<String, OptionMap>,
    ) -> Option<Row> {
        let mut row = match &config.prepare {
            Some(name) => match self.hooks.prepare(name) {
                Some(hook) => hook(row, config)?,
                None => {
                    tracing::warn!(hook = %name, "Configured prepare hook is not registered");
                    row
                }
            },
            None => row,
        };

        for name in names {
            let Some(map) = options.get(name) else {
                continue;
            };
            // Only scalar values are mapped; Missing and Structured
            // pass through untouched.
            let display = match row.value(name) {
                FieldValue::Scalar(raw) => Some(map_codes(raw, map)),
                _ => None,
            };
            if let Some(display) = display {
                row.set_value(name.clone(), FieldValue::Scalar(display));
            }
        }

        Some(row)
    }
}

/// Map a stored value through an option map
///
/// The raw value is split on `||`, each part trimmed and replaced by
/// its label when the map knows it (unmapped parts pass through),
/// and the results joined with `", "`.
fn map_codes(raw: &str, map: &OptionMap) -> String {
    raw.split(VALUE_DELIMITER)
        .map(str::trim)
        .map(|part| map.label(part).unwrap_or(part).to_string())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing_config::{ConfigResolver, ConfigStore, Fragment, FragmentColumn};
    use listing_model::{FieldKind, Operator};
    use listing_test_utils::{folder, node, MemoryFields, MemoryStore, StaticMessages};
    use pretty_assertions::assert_eq;

    struct Fixture {
        store: Arc<MemoryStore>,
        fields: Arc<MemoryFields>,
        hooks: Arc<HookRegistry>,
        resolver: ConfigResolver,
    }

    impl Fixture {
        fn new(fragment: Fragment) -> Self {
            let store = Arc::new(MemoryStore::new());
            store.insert(folder(1, 0, "Root"));
            Self {
                store,
                fields: Arc::new(MemoryFields::new()),
                hooks: Arc::new(HookRegistry::new()),
                resolver: ConfigResolver::new(
                    Arc::new(ConfigStore::from_fragments(vec![fragment])),
                    Arc::new(StaticMessages::with_defaults()),
                ),
            }
        }

        fn pipeline(&self) -> ListingPipeline {
            ListingPipeline::new(
                Arc::clone(&self.store) as Arc<dyn ResourceStore>,
                Arc::clone(&self.fields) as Arc<dyn FieldSource>,
                Arc::clone(&self.hooks),
            )
        }

        fn config(&self, id: &str) -> ListingConfig {
            self.resolver.resolve(id).unwrap()
        }
    }

    fn fragment(id: &str) -> Fragment {
        Fragment {
            ids: vec![id.to_string()],
            ..Default::default()
        }
    }

    fn params(pairs: &[(&str, &str)]) -> RequestParams {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RequestParams::from_query_pairs(&pairs)
    }

    #[test]
    fn folders_sort_before_documents_then_by_menuindex() {
        let fixture = Fixture::new(fragment("docs"));
        let mut doc = node(2, 1, "Doc");
        doc.menuindex = 0;
        fixture.store.insert(doc);
        let mut sub = folder(3, 1, "Sub");
        sub.menuindex = 5;
        fixture.store.insert(sub);

        let page = fixture
            .pipeline()
            .list(&fixture.store.node(1).unwrap(), &fixture.config("docs"), &params(&[]))
            .unwrap();

        let titles: Vec<&str> = page.items.iter().map(|r| r.node.pagetitle.as_str()).collect();
        assert_eq!(titles, vec!["Sub", "Doc"]);
    }

    #[test]
    fn paginates_with_config_default_limit() {
        let fixture = Fixture::new(fragment("docs"));
        for id in 2..=46 {
            let mut n = node(id, 1, &format!("Doc {id}"));
            n.menuindex = id;
            fixture.store.insert(n);
        }

        let page = fixture
            .pipeline()
            .list(
                &fixture.store.node(1).unwrap(),
                &fixture.config("docs"),
                &params(&[("page", "2")]),
            )
            .unwrap();

        // 45 documents at the default page size of 20: page 2 holds
        // items 21-40.
        assert_eq!(page.total, 45);
        assert_eq!(page.per_page, 20);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.items[0].node.pagetitle, "Doc 22");
        assert_eq!(page.items[19].node.pagetitle, "Doc 41");
        assert_eq!(page.last_page(), 3);
    }

    #[test]
    fn requested_limit_is_honored_only_when_listed() {
        let fixture = Fixture::new(fragment("docs"));
        for id in 2..=31 {
            fixture.store.insert(node(id, 1, &format!("Doc {id}")));
        }
        let config = fixture.config("docs");
        let pipeline = fixture.pipeline();
        let parent = fixture.store.node(1).unwrap();

        let page = pipeline.list(&parent, &config, &params(&[("limit", "10")])).unwrap();
        assert_eq!(page.per_page, 10);
        assert_eq!(page.items.len(), 10);

        let page = pipeline.list(&parent, &config, &params(&[("limit", "7")])).unwrap();
        assert_eq!(page.per_page, 20);
    }

    #[test]
    fn option_codes_become_labels() {
        let mut f = fragment("docs");
        f.columns.push(FragmentColumn::named("tags"));
        let fixture = Fixture::new(f);
        fixture.fields.define(
            "tags",
            FieldKind::ListboxMultiple,
            "Alpha==a||Gamma==c",
        );
        fixture.store.insert(node(2, 1, "Doc"));
        fixture
            .store
            .set_field(2, "tags", FieldValue::Scalar("a||b||c".to_string()));

        let page = fixture
            .pipeline()
            .list(&fixture.store.node(1).unwrap(), &fixture.config("docs"), &params(&[]))
            .unwrap();

        assert_eq!(
            page.items[0].value("tags"),
            &FieldValue::Scalar("Alpha, b, Gamma".to_string())
        );
    }

    #[test]
    fn structured_and_missing_values_are_left_alone() {
        let mut f = fragment("docs");
        f.columns.push(FragmentColumn::named("tags"));
        let fixture = Fixture::new(f);
        fixture.fields.define("tags", FieldKind::Checkbox, "Alpha==a");
        let structured = FieldValue::Structured(serde_json::json!(["a", "c"]));
        fixture.store.insert(node(2, 1, "With structure"));
        fixture.store.set_field(2, "tags", structured.clone());
        fixture.store.insert(node(3, 1, "Without value"));

        let page = fixture
            .pipeline()
            .list(&fixture.store.node(1).unwrap(), &fixture.config("docs"), &params(&[]))
            .unwrap();

        assert_eq!(page.items[0].value("tags"), &structured);
        assert_eq!(page.items[1].value("tags"), &FieldValue::Missing);
    }

    #[test]
    fn query_hook_narrows_the_listing() {
        let mut f = fragment("docs");
        f.query = Some("published_only".to_string());
        let mut fixture = Fixture::new(f);
        let mut hooks = HookRegistry::new();
        hooks.register_query("published_only", |query| {
            query.narrow("published", Operator::Equals, "1");
        });
        fixture.hooks = Arc::new(hooks);

        let mut published = node(2, 1, "Published");
        published.published = true;
        fixture.store.insert(published);
        fixture.store.insert(node(3, 1, "Draft"));

        let page = fixture
            .pipeline()
            .list(&fixture.store.node(1).unwrap(), &fixture.config("docs"), &params(&[]))
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].node.pagetitle, "Published");
    }

    #[test]
    fn prepare_hook_can_drop_rows() {
        let mut f = fragment("docs");
        f.prepare = Some("hide_deleted".to_string());
        let mut fixture = Fixture::new(f);
        let mut hooks = HookRegistry::new();
        hooks.register_prepare("hide_deleted", |row, _config| {
            if row.node.deleted { None } else { Some(row) }
        });
        fixture.hooks = Arc::new(hooks);

        fixture.store.insert(node(2, 1, "Kept"));
        let mut gone = node(3, 1, "Gone");
        gone.deleted = true;
        fixture.store.insert(gone);

        let page = fixture
            .pipeline()
            .list(&fixture.store.node(1).unwrap(), &fixture.config("docs"), &params(&[]))
            .unwrap();

        let titles: Vec<&str> = page.items.iter().map(|r| r.node.pagetitle.as_str()).collect();
        assert_eq!(titles, vec!["Kept"]);
    }

    #[test]
    fn unregistered_hooks_are_skipped() {
        let mut f = fragment("docs");
        f.query = Some("missing_hook".to_string());
        f.prepare = Some("also_missing".to_string());
        let fixture = Fixture::new(f);
        fixture.store.insert(node(2, 1, "Doc"));

        let page = fixture
            .pipeline()
            .list(&fixture.store.node(1).unwrap(), &fixture.config("docs"), &params(&[]))
            .unwrap();

        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn injected_filters_narrow_by_column_value() {
        let mut f = fragment("docs");
        f.columns.push(FragmentColumn::named("tags"));
        let fixture = Fixture::new(f);
        fixture.store.insert(node(2, 1, "Rust doc"));
        fixture
            .store
            .set_field(2, "tags", FieldValue::Scalar("rust".to_string()));
        fixture.store.insert(node(3, 1, "Other doc"));

        let pipeline = fixture
            .pipeline()
            .with_filters(vec![Box::new(crate::FieldFilter::new())]);
        let page = pipeline
            .list(
                &fixture.store.node(1).unwrap(),
                &fixture.config("docs"),
                &params(&[("tags", "rust")]),
            )
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].node.pagetitle, "Rust doc");
    }

    #[test]
    fn page_links_preserve_filter_parameters() {
        let fixture = Fixture::new(fragment("docs"));
        fixture.store.insert(node(2, 1, "Doc"));

        let page = fixture
            .pipeline()
            .list(
                &fixture.store.node(1).unwrap(),
                &fixture.config("docs"),
                &params(&[("tags", "rust"), ("page", "1")]),
            )
            .unwrap();

        assert_eq!(
            page.query_for_page(2),
            vec![
                ("tags".to_string(), "rust".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }
}
