pub mod application {
    pub mod product {
        pub mod create;
        pub mod get_status;
        pub mod list_all;
        pub mod purchase;
        pub mod restock;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod restock_policy;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_status;
            pub mod list_all;
            pub mod purchase;
            pub mod restock;
        }
    }
}
