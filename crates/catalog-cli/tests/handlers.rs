//! Handler behaviour against an in-memory catalog.

use std::sync::Arc;

use catalog_cli::handlers::{
    add::{self, AddArgs},
    list::{self, ListArgs},
    remove, show,
    update::{self, UpdateArgs},
};
use catalog_cli::presentation::PendingDeletion;
use catalog_cli::{CliContext, CliError};
use catalog_core::test_utils::{FakeProductApi, ProductBuilder};
use catalog_core::{
    ApiPortError, CompatibleModel, Operation, ProductApiPort, ProductCategory, SortField,
};

fn context(api: &Arc<FakeProductApi>) -> CliContext {
    CliContext::with_api(Arc::clone(api) as Arc<dyn ProductApiPort>)
}

fn seeded() -> Arc<FakeProductApi> {
    Arc::new(FakeProductApi::new().with_products([
        ProductBuilder::new()
            .with_id("1")
            .with_name("Módulo ABS")
            .with_price(320.0)
            .build(),
        ProductBuilder::new()
            .with_id("2")
            .with_name("Bracket B")
            .with_category(ProductCategory::Accessories)
            .with_price(12.5)
            .build(),
        ProductBuilder::new()
            .with_id("3")
            .with_name("Filtro")
            .with_category(ProductCategory::Motor)
            .with_description("Filtro de aceite para module")
            .with_price(18.0)
            .build(),
    ]))
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map_or(-1, CliError::exit_code)
}

#[tokio::test]
async fn test_list_projects_search_and_sort() {
    let api = seeded();
    let ctx = context(&api);
    let args = ListArgs {
        search: Some("modul".to_string()),
        sort: SortField::Price,
        descending: true,
    };

    list::execute(&ctx, &args).await.unwrap();
    let ids: Vec<String> = list::visible_products(&ctx, &args)
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, ["3"]);
    assert_eq!(api.calls(Operation::List), 1);
}

#[tokio::test]
async fn test_list_failure_maps_to_exit_code() {
    let api = seeded();
    api.fail_next(
        Operation::List,
        ApiPortError::Unreachable {
            message: "connection refused".to_string(),
        },
    );
    let ctx = context(&api);

    let err = list::execute(&ctx, &ListArgs::default()).await.unwrap_err();
    assert_eq!(exit_code(&err), 69);
}

#[tokio::test]
async fn test_show_fetches_once_then_serves_cache() {
    let api = seeded();
    let ctx = context(&api);

    show::execute(&ctx, "2").await.unwrap();
    show::execute(&ctx, "2").await.unwrap();

    assert_eq!(api.calls(Operation::Get), 1);
    assert_eq!(ctx.store().selected().map(|p| p.id), Some("2".to_string()));
}

#[tokio::test]
async fn test_show_missing_is_not_found() {
    let api = seeded();
    let ctx = context(&api);

    let err = show::execute(&ctx, "99").await.unwrap_err();
    assert_eq!(exit_code(&err), 66);
}

#[tokio::test]
async fn test_add_creates_and_caches() {
    let api = Arc::new(FakeProductApi::new());
    let ctx = context(&api);
    let args = AddArgs {
        name: "Turbo".to_string(),
        category: ProductCategory::Motor,
        price: 900.0,
        stock: 2,
        description: "Garrett".to_string(),
        models: vec![CompatibleModel::Golf7],
    };

    add::execute(&ctx, args).await.unwrap();

    let products = ctx.store().products();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Turbo");
    assert!(api.contains(&products[0].id));
}

#[tokio::test]
async fn test_add_rejects_invalid_input_without_calling_server() {
    let api = Arc::new(FakeProductApi::new());
    let ctx = context(&api);
    let args = AddArgs {
        name: String::new(),
        category: ProductCategory::Motor,
        price: 1.0,
        stock: 0,
        description: String::new(),
        models: Vec::new(),
    };

    let err = add::execute(&ctx, args).await.unwrap_err();
    assert_eq!(exit_code(&err), 2);
    assert_eq!(api.total_calls(), 0);
}

#[tokio::test]
async fn test_update_submits_full_record() {
    let api = seeded();
    let ctx = context(&api);
    let args = UpdateArgs {
        id: "1".to_string(),
        stock: Some(0),
        ..UpdateArgs::default()
    };

    update::execute(&ctx, args).await.unwrap();

    assert_eq!(api.calls(Operation::Get), 1);
    assert_eq!(api.calls(Operation::Update), 1);
    let cached = ctx.store().snapshot().get("1").cloned().unwrap();
    assert_eq!(cached.stock, 0);
    assert_eq!(cached.name, "Módulo ABS");
}

#[tokio::test]
async fn test_update_without_changes_skips_request() {
    let api = seeded();
    let ctx = context(&api);
    let args = UpdateArgs {
        id: "1".to_string(),
        ..UpdateArgs::default()
    };

    update::execute(&ctx, args).await.unwrap();
    assert_eq!(api.calls(Operation::Update), 0);
}

#[tokio::test]
async fn test_update_server_fault_leaves_cache() {
    let api = seeded();
    let ctx = context(&api);
    show::execute(&ctx, "1").await.unwrap();
    api.fail_next(Operation::Update, ApiPortError::Server { status: 500 });

    let args = UpdateArgs {
        id: "1".to_string(),
        price: Some(1.0),
        ..UpdateArgs::default()
    };
    let err = update::execute(&ctx, args).await.unwrap_err();

    assert_eq!(exit_code(&err), 75);
    let cached = ctx.store().snapshot().get("1").cloned().unwrap();
    assert!((cached.price - 320.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_remove_confirmed_deletes() {
    let api = seeded();
    let ctx = context(&api);

    remove::execute(&ctx, "2", true).await.unwrap();

    assert!(!api.contains("2"));
    assert!(ctx.store().snapshot().get("2").is_none());
    assert!(ctx.store().selected().is_none());
}

#[tokio::test]
async fn test_remove_cancelled_keeps_product() {
    let api = seeded();
    let ctx = context(&api);
    let product = ProductBuilder::new().with_id("2").build();

    remove::resolve(&ctx, PendingDeletion::new(product), false)
        .await
        .unwrap();

    assert!(api.contains("2"));
    assert_eq!(api.calls(Operation::Delete), 0);
}
