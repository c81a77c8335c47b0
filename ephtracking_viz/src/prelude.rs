pub use std::{
    collections::{BTreeMap, HashMap},
    env, fmt,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicBool, Ordering},
    },
};

pub use tokio::{
    task::JoinHandle,
    time::{Duration, Instant, Interval, interval_at},
};

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};
