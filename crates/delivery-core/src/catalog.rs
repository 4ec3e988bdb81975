use delivery_types::domain::catalog::{FoodItem, Restaurant};
use rust_decimal::Decimal;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Read-only restaurants and menu items the browsing screens draw from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>, items: Vec<FoodItem>) -> Self {
        Self { restaurants, items }
    }

    /// Built-in demo data: three restaurants and the Burger Palace menu.
    pub fn sample() -> Self {
        let restaurant = |id: &str, name: &str, cuisine: &str, rating: f32, eta: &str| Restaurant {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            rating,
            delivery_time: eta.into(),
            image: PLACEHOLDER_IMAGE.into(),
        };
        let item = |id: &str, name: &str, desc: &str, cents: i64, category: &str| FoodItem {
            id: id.into(),
            name: name.into(),
            description: desc.into(),
            price: Decimal::new(cents, 2),
            image: PLACEHOLDER_IMAGE.into(),
            category: category.into(),
            restaurant_id: "1".into(),
        };

        Self::new(
            vec![
                restaurant("1", "Burger Palace", "American", 4.5, "20-30 min"),
                restaurant("2", "Pizza Express", "Italian", 4.3, "25-35 min"),
                restaurant("3", "Sushi Master", "Japanese", 4.7, "30-40 min"),
            ],
            vec![
                item(
                    "1",
                    "Classic Burger",
                    "Juicy beef patty with fresh vegetables",
                    1299,
                    "Burgers",
                ),
                item(
                    "2",
                    "Cheese Burger",
                    "Classic burger with melted cheese",
                    1499,
                    "Burgers",
                ),
                item("3", "French Fries", "Crispy golden fries", 599, "Sides"),
            ],
        )
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn menu_for(&self, restaurant_id: &str) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|i| i.restaurant_id == restaurant_id)
            .collect()
    }

    pub fn food_item(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_lookups() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.restaurants().len(), 3);
        assert_eq!(catalog.restaurant("3").unwrap().name, "Sushi Master");
        assert!(catalog.restaurant("9").is_none());

        let menu = catalog.menu_for("1");
        assert_eq!(menu.len(), 3);
        assert!(catalog.menu_for("2").is_empty());

        let fries = catalog.food_item("3").unwrap();
        assert_eq!(fries.price, Decimal::new(599, 2));
    }
}
