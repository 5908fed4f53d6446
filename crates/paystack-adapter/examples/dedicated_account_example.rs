/*
[INPUT]:  PAYSTACK_SECRET_KEY environment variable
[OUTPUT]: Dedicated account listing printed to stdout
[POS]:    Examples - dedicated account queries
[UPDATE]: When adding new dedicated account endpoints
*/

use std::time::Duration;

use paystack_adapter::*;

/// Example: list and fetch dedicated virtual accounts
#[tokio::main]
async fn main() {
    println!("=== Paystack Dedicated Account Example ===\n");

    let secret_key = match std::env::var("PAYSTACK_SECRET_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set PAYSTACK_SECRET_KEY to run this example");
            return;
        }
    };

    let client = match PaystackClient::new(secret_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let accounts = client
        .dedicated_accounts()
        .with_timeout(Duration::from_secs(10));

    println!("Listing active NGN accounts...");
    let list = match accounts.list_n(5, 1).await {
        Ok(list) => list,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ {} of {} accounts", list.values.len(), list.meta.total);

    if let Some(first) = list.values.first() {
        println!("\nFetching account {}...", first.id);
        match accounts.get(&first.id.to_string()).await {
            Ok(account) => println!("✓ Account: {:?}", account.data.dedicated_account),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Dedicated account example complete");
}
