pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod stoppages {
        pub mod core {
            pub mod civil;
            pub mod sector;
            pub mod state;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod decision;
            pub mod start_stoppage {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_stoppage {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_stoppage {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_stoppages {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod summarize_stoppages {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_errors;
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod stoppage_row;
            }
        }
        pub mod application {
            pub mod errors;
            pub mod stoppage_store;
        }
    }
}

pub mod shell;
