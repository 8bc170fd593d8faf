//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements    | Connects to                       |
//! |-------------|---------------|-----------------------------------|
//! | `hardware`  | SwitchPort    | switch input pins                 |
//! |             | RelayPort     | relay output pin                  |
//! | `log_sink`  | EventSink     | Serial log output                 |
//! | `shutdown`  | ShutdownPort  | OS power-off command / deep sleep |
//! | `time`      | (clock)       | ESP32 system timer / `Instant`    |

pub mod hardware;
pub mod log_sink;
pub mod shutdown;
pub mod time;
