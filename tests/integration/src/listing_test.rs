//! End-to-end tests over the full workspace wiring
//!
//! Fragments live on disk in a temp directory, the config store
//! discovers them, and the pipeline, dispatcher and crumb resolver
//! run against the shared in-memory collaborators.

use listing_config::{ConfigResolver, ConfigStore, HookRegistry};
use listing_engine::{
    render_cell, Action, ActionDispatcher, CrumbResolver, FieldFilter, ListingPipeline,
};
use listing_model::{
    Duplicator, FieldKind, FieldSource, FieldValue, Operator, RequestParams, ResourceStore,
};
use listing_test_utils::{folder, node, MemoryFields, MemoryStore, StaticMessages};
use pretty_assertions::assert_eq;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

struct World {
    _config_dir: TempDir,
    store: Arc<MemoryStore>,
    fields: Arc<MemoryFields>,
    hooks: Arc<HookRegistry>,
    resolver: ConfigResolver,
}

impl World {
    /// A content tree, a fragment directory, and default hooks:
    ///
    /// ```text
    /// Root (1)
    ///   Articles (10, folder)
    ///     45 articles (100..144), tags on the first
    ///   About (11)
    /// ```
    fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let config_dir = TempDir::new().unwrap();
        fs::write(
            config_dir.path().join("articles.toml"),
            r#"
ids = ["10", "articles"]
query = "not_deleted"

[[columns]]
name = "tags"
caption = "Tags"

[lang]
edit_document = "Open article"
"#,
        )
        .unwrap();

        let store = Arc::new(MemoryStore::new());
        store.insert(folder(1, 0, "Root"));
        store.insert(folder(10, 1, "Articles"));
        store.insert(node(11, 1, "About"));
        for i in 0..45 {
            let mut article = node(100 + i, 10, &format!("Article {i}"));
            article.menuindex = i;
            store.insert(article);
        }
        store.set_field(100, "tags", FieldValue::Scalar("a||b||c".to_string()));

        let fields = Arc::new(MemoryFields::new());
        fields.define("tags", FieldKind::ListboxMultiple, "Alpha==a||Gamma==c");

        let mut hooks = HookRegistry::new();
        hooks.register_query("not_deleted", |query| {
            query.narrow("deleted", Operator::Equals, "0");
        });
        hooks.register_renderer("title_link", |value, row, config| {
            let title = value.as_scalar().unwrap_or("");
            if row.node.isfolder {
                format!("<a href=\"?listing={}&folder={}\">{title}</a>", config.id, row.node.id)
            } else {
                format!("<a href=\"?edit={}\">{title}</a>", row.node.id)
            }
        });

        let config_store = Arc::new(ConfigStore::discover(config_dir.path()).unwrap());
        let resolver = ConfigResolver::new(config_store, Arc::new(StaticMessages::with_defaults()));

        Self {
            _config_dir: config_dir,
            store,
            fields,
            hooks: Arc::new(hooks),
            resolver,
        }
    }

    fn pipeline(&self) -> ListingPipeline {
        ListingPipeline::new(
            Arc::clone(&self.store) as Arc<dyn ResourceStore>,
            Arc::clone(&self.fields) as Arc<dyn FieldSource>,
            Arc::clone(&self.hooks),
        )
        .with_filters(vec![Box::new(FieldFilter::new())])
    }
}

#[test]
fn discovered_config_resolves_under_every_declared_id() {
    let world = World::new();

    let by_number = world.resolver.resolve("10").unwrap();
    let by_name = world.resolver.resolve("articles").unwrap();

    assert_eq!(by_number.id, "10");
    assert_eq!(by_name.id, "articles");
    // Same fragment either way: default column plus the tags column.
    assert_eq!(by_number.column_names(), vec!["pagetitle", "tags"]);
    assert_eq!(by_number.message("edit_document"), "Open article");
    assert!(world.resolver.resolve("unknown").is_none());
}

#[test]
fn listing_paginates_transforms_and_links() {
    let world = World::new();
    let config = world.resolver.resolve("10").unwrap();
    let articles = world.store.node(10).unwrap();

    let first = world
        .pipeline()
        .list(&articles, &config, &RequestParams::default())
        .unwrap();
    assert_eq!(first.total, 45);
    assert_eq!(first.per_page, 20);
    // Option codes resolved on the first article.
    assert_eq!(
        first.items[0].value("tags"),
        &FieldValue::Scalar("Alpha, b, Gamma".to_string())
    );

    let params = RequestParams::from_query_pairs(&[
        ("page".to_string(), "2".to_string()),
    ]);
    let second = world.pipeline().list(&articles, &config, &params).unwrap();
    assert_eq!(second.items.len(), 20);
    assert_eq!(second.items[0].node.pagetitle, "Article 20");
    assert_eq!(second.items[19].node.pagetitle, "Article 39");
    assert_eq!(second.last_page(), 3);
    assert_eq!(
        second.query_for_page(3),
        vec![("page".to_string(), "3".to_string())]
    );
}

#[test]
fn filters_and_query_hook_narrow_the_result() {
    let world = World::new();
    let config = world.resolver.resolve("10").unwrap();
    let articles = world.store.node(10).unwrap();

    // The per-column filter finds the tagged article.
    let params = RequestParams::from_query_pairs(&[("tags".to_string(), "b".to_string())]);
    let page = world.pipeline().list(&articles, &config, &params).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].node.pagetitle, "Article 0");

    // The configured query hook hides soft-deleted articles.
    world.store.set_deleted(&[101], true).unwrap();
    let page = world
        .pipeline()
        .list(&articles, &config, &RequestParams::default())
        .unwrap();
    assert_eq!(page.total, 44);
}

#[test]
fn folders_lead_the_root_listing_and_render_as_links() {
    let world = World::new();
    // The root has no fragment of its own; reuse the articles config
    // shape by listing under it.
    let config = world.resolver.resolve("articles").unwrap();
    let root = world.store.node(1).unwrap();

    let page = world
        .pipeline()
        .list(&root, &config, &RequestParams::default())
        .unwrap();
    let titles: Vec<&str> = page.items.iter().map(|r| r.node.pagetitle.as_str()).collect();
    assert_eq!(titles, vec!["Articles", "About"]);

    let column = config.column("pagetitle").unwrap();
    let rendered = render_cell(&world.hooks, column, &page.items[0], &config);
    assert_eq!(
        rendered,
        "<a href=\"?listing=articles&folder=10\">Articles</a>"
    );
    let rendered = render_cell(&world.hooks, column, &page.items[1], &config);
    assert_eq!(rendered, "<a href=\"?edit=11\">About</a>");
}

#[test]
fn bulk_actions_mutate_only_their_targets() {
    let world = World::new();
    let dispatcher = ActionDispatcher::new(
        Arc::clone(&world.store) as Arc<dyn ResourceStore>,
        Arc::clone(&world.store) as Arc<dyn Duplicator>,
    );

    dispatcher.apply(Action::Publish, &[100, 101]).unwrap();
    assert!(world.store.node(100).unwrap().published);
    assert!(world.store.node(101).unwrap().published);
    assert!(!world.store.node(102).unwrap().published);

    // Twice over the same targets ends in the same state.
    dispatcher.apply(Action::Publish, &[100, 101]).unwrap();
    assert!(world.store.node(100).unwrap().published);

    let mutations_before = world.store.mutation_count();
    let result = dispatcher.apply_named("archive", &[100]);
    assert!(result.is_err());
    assert_eq!(world.store.mutation_count(), mutations_before);
}

#[test]
fn breadcrumbs_run_root_first() {
    let world = World::new();
    let resolver = CrumbResolver::new(Arc::clone(&world.store) as Arc<dyn ResourceStore>);

    let crumbs = resolver
        .crumbs(&world.store.node(100).unwrap())
        .unwrap()
        .unwrap();
    let ids: Vec<i64> = crumbs.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 10]);

    assert_eq!(resolver.crumbs(&world.store.node(1).unwrap()).unwrap(), None);
}
