// JSON adapters between the serializable boundary types
// and the parameter types of the use cases.

pub use cc_boundary::*;

use cc_core::usecases;

pub fn new_shop_params(new_shop: NewCoffeeShop) -> usecases::NewCoffeeShop {
    let NewCoffeeShop {
        name,
        address,
        description,
        image_url,
        coffee_brands,
        machine_brands,
        coffee_styles,
        dietary_options,
        seating_options,
        noise_level,
        price_range,
        open_now,
        is_independent,
        laptop_friendly,
        coffee_quality,
        ambience,
        service,
        workability,
        menu_variety,
        price_value,
        latitude,
        longitude,
        website,
        phone,
        maps_url,
        opening_hours,
    } = new_shop;
    usecases::NewCoffeeShop {
        name,
        address,
        description,
        image_url,
        coffee_brands,
        machine_brands,
        coffee_styles,
        dietary_options,
        seating_options,
        noise_level,
        price_range,
        open_now,
        is_independent,
        laptop_friendly,
        coffee_quality,
        ambience,
        service,
        workability,
        menu_variety,
        price_value,
        latitude,
        longitude,
        website,
        phone,
        maps_url,
        opening_hours,
    }
}

pub fn new_rating_params(new_rating: NewShopRating) -> usecases::NewShopRating {
    let NewShopRating {
        rating,
        review,
        visited,
        want_to_go,
    } = new_rating;
    usecases::NewShopRating {
        rating,
        review,
        visited,
        want_to_go,
    }
}
