// Crate entry point. Declares the module tree so the binary and tests can reach it.
//
// Layout
// - modules::students::core: records, error catalog and the registry port.
// - modules::students::use_cases: one directory per operation on the resource.
// - modules::students::adapters: axum extractors, HTML bodies and the in-memory registry.
// - shell: configuration, shared state and the HTTP router.

pub mod modules {
    pub mod students {
        pub mod core {
            pub mod errors;
            pub mod ports;
            pub mod resource_path;
            pub mod student;
        }
        pub mod use_cases {
            pub mod list_students {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_student {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_student {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_student {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod html;
                pub mod params;
                pub mod path_info;
                pub mod response;
            }
            pub mod outbound {
                pub mod in_memory_registry;
            }
        }
    }
}

pub mod shell;
