// commerce/src/models/cart.rs

use crate::models::item::Item;
use serde::Serialize;

/// One cart line: an item plus how many of it sit in the cart.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
  pub item: Item,
  pub quantity: i32,
}

/// The full cart as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
  pub id: i64,
  pub user_id: i64,
  pub items: Vec<CartLine>,
  pub total_cents: i64,
}

/// Cart total invariant: the sum of `price * quantity` over all lines.
pub fn compute_total(lines: &[CartLine]) -> i64 {
  lines
    .iter()
    .map(|line| line.item.price_cents * i64::from(line.quantity))
    .sum()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn line(price_cents: i64, quantity: i32) -> CartLine {
    CartLine {
      item: Item {
        id: 1,
        name: "Round Widget".to_string(),
        description: None,
        price_cents,
      },
      quantity,
    }
  }

  #[test]
  fn empty_cart_totals_zero() {
    assert_eq!(compute_total(&[]), 0);
  }

  #[test]
  fn total_is_the_sum_of_price_times_quantity() {
    let lines = vec![line(299, 3), line(199, 1)];
    assert_eq!(compute_total(&lines), 299 * 3 + 199);
  }
}
