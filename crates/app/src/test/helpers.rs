//! Test Helpers

use crust::ingredients::IngredientSelection;

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            models::{CartItem, NewCartItem},
        },
        catalog::models::MenuItemUuid,
    },
    identity::SessionCredential,
    test::TestContext,
};

pub(crate) async fn add_item(
    ctx: &TestContext,
    credential: &SessionCredential,
    menu_item: MenuItemUuid,
    quantity: i64,
    ingredients: &[&str],
) -> Result<CartItem, CartsServiceError> {
    ctx.carts
        .add_item_to_cart(
            credential,
            NewCartItem {
                menu_item_uuid: menu_item,
                quantity,
                ingredients: ingredients.iter().copied().collect::<IngredientSelection>(),
            },
        )
        .await
}
