use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use tinypay_api::app::{build_router, AppService, RedirectTargets};
use tinypay_ledger::{InMemoryLedger, Ledger};
use tinypay_wallet::WalletService;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(RedirectTargets::default()).await
    }

    async fn spawn_with(redirects: RedirectTargets) -> Self {
        // Same router as prod, backed by the in-memory ledger, bound to an
        // ephemeral port.
        let ledger: Arc<dyn Ledger> = Arc::new(InMemoryLedger::new());
        let service: Arc<AppService> = Arc::new(WalletService::new(ledger));
        let app = build_router(service, redirects);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_account(
    client: &reqwest::Client,
    base_url: &str,
    id: &str,
    balance: f64,
    currency: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/account", base_url))
        .json(&json!({"id": id, "balance": balance, "currency": currency}))
        .send()
        .await
        .unwrap()
}

async fn post_payment(
    client: &reqwest::Client,
    base_url: &str,
    from: &str,
    to: &str,
    amount: f64,
) -> reqwest::Response {
    client
        .post(format!("{}/api/payment", base_url))
        .json(&json!({"account-from": from, "account-to": to, "amount": amount}))
        .send()
        .await
        .unwrap()
}

async fn balances(client: &reqwest::Client, base_url: &str) -> serde_json::Value {
    let res = client
        .get(format!("{}/api/accounts", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

fn balance_of(accounts: &serde_json::Value, id: &str) -> f64 {
    accounts["accounts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"] == id)
        .unwrap_or_else(|| panic!("account {id} missing from listing"))["balance"]
        .as_f64()
        .unwrap()
}

#[tokio::test]
async fn transfer_happy_path() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_account(&client, &srv.base_url, "alice", 100.0, "USD").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], "alice");
    assert_eq!(body["balance"], json!(100.0));
    assert_eq!(body["currency"], "USD");

    create_account(&client, &srv.base_url, "bob", 0.0, "USD").await;

    let res = post_payment(&client, &srv.base_url, "alice", "bob", 40.0).await;
    assert_eq!(res.status(), StatusCode::OK);
    let payment: serde_json::Value = res.json().await.unwrap();
    assert_eq!(payment["account-from"], "alice");
    assert_eq!(payment["account-to"], "bob");
    assert_eq!(payment["amount"], json!(40.0));
    assert_eq!(payment["currency"], "USD");
    assert!(payment["time"].is_string());

    let accounts = balances(&client, &srv.base_url).await;
    assert_eq!(balance_of(&accounts, "alice"), 60.0);
    assert_eq!(balance_of(&accounts, "bob"), 40.0);

    let res = client
        .get(format!("{}/api/payments", srv.base_url))
        .send()
        .await
        .unwrap();
    let listing: serde_json::Value = res.json().await.unwrap();
    assert_eq!(listing["payments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn insufficient_funds_is_rejected_with_400() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv.base_url, "poor", 5.0, "USD").await;
    create_account(&client, &srv.base_url, "rich", 0.0, "USD").await;

    let res = post_payment(&client, &srv.base_url, "poor", "rich", 100.0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["code"], 400);
    assert_eq!(body["error"]["text"], "account poor has not enough money");

    // Nothing was committed.
    let accounts = balances(&client, &srv.base_url).await;
    assert_eq!(balance_of(&accounts, "poor"), 5.0);
    assert_eq!(balance_of(&accounts, "rich"), 0.0);
}

#[tokio::test]
async fn currency_mismatch_is_rejected_with_400() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv.base_url, "usd", 10.0, "USD").await;
    create_account(&client, &srv.base_url, "eur", 10.0, "EUR").await;

    let res = post_payment(&client, &srv.base_url, "usd", "eur", 1.0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["error"]["text"],
        "accounts usd and eur have different balance currencies, payment can't be processed"
    );
}

#[tokio::test]
async fn unknown_account_is_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv.base_url, "a", 10.0, "USD").await;

    let res = post_payment(&client, &srv.base_url, "a", "ghost", 1.0).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"]["text"], "account ghost not found");
}

#[tokio::test]
async fn unknown_currency_is_400_with_cause_chain() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_account(&client, &srv.base_url, "a", 10.0, "WAT").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"]["text"], "can't process operation with currency WAT");
    let details = body["error"]["details"].as_array().unwrap();
    assert_eq!(details[0], "WAT is not a valid ISO 4217 code");
}

#[tokio::test]
async fn duplicate_account_id_is_409() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let res = create_account(&client, &srv.base_url, "dup", 1.0, "USD").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = create_account(&client, &srv.base_url, "dup", 2.0, "USD").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"]["text"], "account dup already exists");

    // The original balance stands.
    let accounts = balances(&client, &srv.base_url).await;
    assert_eq!(balance_of(&accounts, "dup"), 1.0);
}

#[tokio::test]
async fn concurrent_transfers_commit_at_most_the_balance() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_account(&client, &srv.base_url, "a", 10.0, "USD").await;
    create_account(&client, &srv.base_url, "b", 0.0, "USD").await;
    create_account(&client, &srv.base_url, "d", 0.0, "USD").await;

    // Two racing transfers of 7 from a balance of 10: exactly one can
    // commit. The loser sees either a version conflict (409) or, when fully
    // serialized behind the winner, insufficient funds (400).
    let (to_b, to_d) = tokio::join!(
        post_payment(&client, &srv.base_url, "a", "b", 7.0),
        post_payment(&client, &srv.base_url, "a", "d", 7.0),
    );

    let statuses = [to_b.status(), to_d.status()];
    let wins = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    assert_eq!(wins, 1, "exactly one transfer must commit, got {statuses:?}");
    for s in statuses {
        assert!(
            s == StatusCode::OK || s == StatusCode::CONFLICT || s == StatusCode::BAD_REQUEST,
            "unexpected status {s}"
        );
    }

    let accounts = balances(&client, &srv.base_url).await;
    assert_eq!(balance_of(&accounts, "a"), 3.0);
    let winner_balance = balance_of(&accounts, "b") + balance_of(&accounts, "d");
    assert_eq!(winner_balance, 7.0);
}

#[tokio::test]
async fn minor_unit_precision_follows_the_currency() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // JPY has no minor units; BHD has three.
    create_account(&client, &srv.base_url, "j1", 1000.0, "JPY").await;
    create_account(&client, &srv.base_url, "j2", 0.0, "JPY").await;
    create_account(&client, &srv.base_url, "b1", 1.0, "BHD").await;
    create_account(&client, &srv.base_url, "b2", 0.0, "BHD").await;

    let res = post_payment(&client, &srv.base_url, "j1", "j2", 250.0).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = post_payment(&client, &srv.base_url, "b1", "b2", 0.125).await;
    assert_eq!(res.status(), StatusCode::OK);

    let accounts = balances(&client, &srv.base_url).await;
    assert_eq!(balance_of(&accounts, "j1"), 750.0);
    assert_eq!(balance_of(&accounts, "j2"), 250.0);
    assert_eq!(balance_of(&accounts, "b1"), 0.875);
    assert_eq!(balance_of(&accounts, "b2"), 0.125);
}

#[tokio::test]
async fn landing_routes_answer_301() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let res = client
        .get(format!("{}/api", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert!(res
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("api.md"));

    let res = client.get(format!("{}/", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
}

#[tokio::test]
async fn main_redirect_can_be_overridden() {
    let srv = TestServer::spawn_with(RedirectTargets {
        main: Some("https://example.com/wallet".to_string()),
    })
    .await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let res = client.get(format!("{}/", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        res.headers().get("location").unwrap(),
        "https://example.com/wallet"
    );
}
