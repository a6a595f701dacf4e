///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        password -> Text,
        name -> Nullable<Text>,
        email -> Nullable<Text>,
        avatar_url -> Nullable<Text>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Coffee shops
///////////////////////////////////////////////////////////////////////

table! {
    coffee_shops (id) {
        id -> BigInt,
        user_id -> BigInt,
        created_at -> BigInt,
        name -> Text,
        address -> Text,
        description -> Text,
        image_url -> Text,
        noise_level -> Nullable<Text>,
        price_min -> SmallInt,
        price_max -> SmallInt,
        open_now -> Nullable<Bool>,
        is_independent -> Nullable<Bool>,
        laptop_friendly -> Nullable<Bool>,
        coffee_quality -> Nullable<SmallInt>,
        ambience -> Nullable<SmallInt>,
        service -> Nullable<SmallInt>,
        workability -> Nullable<SmallInt>,
        menu_variety -> Nullable<SmallInt>,
        price_value -> Nullable<SmallInt>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        website -> Nullable<Text>,
        phone -> Nullable<Text>,
        maps_url -> Nullable<Text>,
        opening_hours -> Nullable<Text>,
    }
}

joinable!(coffee_shops -> users (user_id));

table! {
    shop_attribute (rowid) {
        rowid -> BigInt,
        shop_id -> BigInt,
        kind -> SmallInt,
        value -> Text,
    }
}

joinable!(shop_attribute -> coffee_shops (shop_id));

///////////////////////////////////////////////////////////////////////
// Ratings
///////////////////////////////////////////////////////////////////////

table! {
    ratings (id) {
        id -> BigInt,
        shop_id -> BigInt,
        user_id -> BigInt,
        created_at -> BigInt,
        rating -> SmallInt,
        review -> Nullable<Text>,
        visited -> Bool,
        want_to_go -> Bool,
    }
}

joinable!(ratings -> coffee_shops (shop_id));
joinable!(ratings -> users (user_id));

allow_tables_to_appear_in_same_query!(users, coffee_shops, shop_attribute, ratings);
