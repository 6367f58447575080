pub mod shared {
    pub mod core {
        pub mod application_error;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod speech;
    }
}

pub mod modules {
    pub mod activity_records {
        pub mod core {
            pub mod auto_fill;
            pub mod ports;
            pub mod record;
            pub mod sleep;
            pub mod stitch;
        }
        pub mod use_cases {
            pub mod find_preceding_record {
                pub mod handler;
            }
            pub mod stitch_timeline {
                pub mod handler;
                pub mod report;
            }
            pub mod save_record {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_record {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_record {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_records_by_day {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod auto_fill_sleep {
                pub mod command;
                pub mod handler;
                pub mod report;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod record_store_in_memory;
            }
        }
    }

    pub mod memos {
        pub mod core {
            pub mod memo;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod save_memo {
                pub mod command;
                pub mod handler;
            }
            pub mod toggle_memo {
                pub mod handler;
            }
            pub mod delete_memo {
                pub mod handler;
            }
            pub mod list_todays_memos {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod memo_store_in_memory;
            }
        }
    }

    pub mod tags {
        pub mod core {
            pub mod ports;
            pub mod tag;
        }
        pub mod use_cases {
            pub mod save_tag {
                pub mod command;
                pub mod handler;
            }
            pub mod delete_tag {
                pub mod handler;
            }
            pub mod list_tags {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod tag_store_in_memory;
            }
        }
    }

    pub mod templates {
        pub mod core {
            pub mod ports;
            pub mod template;
        }
        pub mod use_cases {
            pub mod save_template {
                pub mod command;
                pub mod handler;
            }
            pub mod delete_template {
                pub mod handler;
            }
            pub mod list_templates {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod template_store_in_memory;
            }
        }
    }
}

pub mod shell;
