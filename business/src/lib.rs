pub mod application {
    pub mod shopping {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod dao;
        pub mod errors;
        pub mod model;
    }
    pub mod shopping {
        pub mod cart;
        pub mod errors;
        pub mod service;
    }
}
