use std::{io, path::PathBuf};

use clap::Args;
use crust::{
    fixtures::{MenuFixture, OrderFixture},
    menu::Menu,
    pricing::OrderSummary,
    receipt::{Receipt, ReceiptLine},
};
use crust_app::{
    config::PricingConfig,
    context::AppContext,
    domain::carts::{CartsServiceError, models::NewCartItem},
    identity::UserUuid,
};
use tracing::info;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Menu fixture (YAML)
    #[arg(long)]
    menu: PathBuf,

    /// Order fixture (YAML)
    #[arg(long)]
    order: PathBuf,

    #[command(flatten)]
    pricing: PricingConfig,
}

pub(crate) async fn run(args: &QuoteArgs) -> Result<(), String> {
    let menu = MenuFixture::from_path(&args.menu)
        .and_then(Menu::try_from)
        .map_err(|error| format!("failed to load menu {}: {error}", args.menu.display()))?;

    let order = OrderFixture::from_path(&args.order)
        .map_err(|error| format!("failed to load order {}: {error}", args.order.display()))?;

    let policy = args
        .pricing
        .summary_policy()
        .map_err(|error| format!("invalid pricing settings: {error}"))?;

    let ctx = AppContext::from_menu(&menu, policy);
    let credential = ctx.identity.open_session(UserUuid::new(), None).await;

    let mut lines = Vec::with_capacity(order.lines.len());

    for line in order.lines {
        let menu_item_uuid = ctx
            .catalog
            .menu_item_uuid(&line.item)
            .ok_or_else(|| format!("unknown menu item: {}", line.item))?;

        let name = menu
            .item(&line.item)
            .map_or_else(|| line.item.clone(), |item| item.name.clone());

        let item = ctx
            .carts
            .add_item_to_cart(
                &credential,
                NewCartItem {
                    menu_item_uuid,
                    quantity: line.quantity,
                    ingredients: line.ingredients,
                },
            )
            .await
            .map_err(|error| format!("failed to add {}: {error}", line.item))?;

        lines.push(ReceiptLine::from_line(name, item.line()));
    }

    let summary = match ctx.carts.find_cart_by_credential(&credential).await {
        Ok(cart) => ctx
            .carts
            .summarize_cart(&cart)
            .await
            .map_err(|error| format!("failed to summarise cart: {error}"))?,
        Err(CartsServiceError::CartNotFound) => OrderSummary::default(),
        Err(error) => return Err(format!("failed to load cart: {error}")),
    };

    info!(lines = lines.len(), total = summary.total, "quoted order");

    Receipt::new(lines, summary, menu.currency())
        .write_to(io::stdout().lock())
        .map_err(|error| format!("failed to write receipt: {error}"))
}
