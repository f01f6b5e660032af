//! The interactive store menu loop.
//!
//! Raw-input concerns (selection, integer parsing, re-prompting) are
//! handled here; the core only ever receives typed values and reports
//! typed errors back.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use storefront_core::{ProductId, Store};

use crate::output;

const MENU_ITEMS: &[&str] = &[
    "List all products in store",
    "Show total amount in store",
    "Make an order",
    "Quit",
];

/// Runs the menu loop until the user quits.
pub fn run(mut store: Store) -> Result<()> {
    loop {
        output::header("Store Menu");
        let choice = Select::new()
            .with_prompt("Enter your choice")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => list_products(&store),
            1 => output::info(&format!(
                "Total quantity in store: {}",
                store.get_total_quantity()
            )),
            2 => make_order(&mut store)?,
            _ => {
                output::info("Bye!");
                return Ok(());
            }
        }
    }
}

/// Prints the active products as a numbered list.
fn list_products(store: &Store) {
    let products = store.get_all_products();
    if products.is_empty() {
        output::warn("No active products in store.");
        return;
    }
    for (index, product) in products.iter().enumerate() {
        println!("{} {}", style(format!("{}.", index + 1)).green(), product);
    }
}

/// Assembles a shopping list interactively and submits it as one order.
fn make_order(store: &mut Store) -> Result<()> {
    let mut shopping_list: Vec<(ProductId, i64)> = Vec::new();

    loop {
        let products = store.get_all_products();
        if products.is_empty() {
            output::warn("No active products available.");
            break;
        }

        let ids: Vec<ProductId> = products.iter().map(|p| p.id()).collect();
        let mut items: Vec<String> = products.iter().map(|p| p.to_string()).collect();
        items.push("Finish order".to_string());

        let choice = Select::new()
            .with_prompt("Which product do you want?")
            .items(&items)
            .default(0)
            .interact()?;
        if choice == ids.len() {
            break;
        }

        let id = ids[choice];
        let name = products[choice].name().to_string();

        // Input re-prompts on non-integer text by itself; positivity and
        // a soft stock check are handled here before the line is queued.
        let quantity: i64 = Input::new()
            .with_prompt(format!("What amount do you want for {name}?"))
            .interact_text()?;

        if quantity <= 0 {
            output::warn("Quantity must be a positive integer.");
            continue;
        }

        if let Some(product) = store.product(id) {
            if product.tracks_stock() && quantity > product.quantity() {
                output::warn(&format!(
                    "Not enough stock available! Currently, there are {} units of {}.",
                    product.quantity(),
                    product.name()
                ));
                continue;
            }
        }

        shopping_list.push((id, quantity));
        output::success(&format!("Product added to list: {name} (x{quantity})"));
    }

    if shopping_list.is_empty() {
        output::info("Nothing ordered.");
        return Ok(());
    }

    tracing::debug!(lines = shopping_list.len(), "submitting order");
    // The core's order is non-transactional: on a mid-list failure the
    // earlier lines stay applied, and we surface the error as-is.
    match store.order(&shopping_list) {
        Ok(total) => output::success(&format!(
            "Total price of the order: {}",
            style(total).green().bold()
        )),
        Err(err) => output::error(&format!("Order failed: {err}")),
    }

    Ok(())
}
