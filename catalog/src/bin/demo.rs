//! Catalog demo - filter a small product set with composed specifications.

use solid_catalog::{
    filter, Color, ColorSpecification, Product, Size, SizeSpecification, Specification,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solid_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let products = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ];

    let green = ColorSpecification::new(Color::Green);
    println!("Green products:");
    for product in filter(&products, &green) {
        println!(" - {} is green", product.name);
    }

    let large_green = green.and(SizeSpecification::new(Size::Large));
    println!("Large green products:");
    for product in filter(&products, &large_green) {
        println!(" - {} is large and green", product.name);
    }
}
