use serde::{Deserialize, Serialize};

use crate::reshape::{FromNamed, named_record_list};

/// Node usage snapshot, from `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub database: Option<DatabaseStatus>,
    pub memory: MemoryUsage,
    pub server: Option<ServerStatus>,
}

/// State of the node's database connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseStatus {
    pub reachable: Option<bool>,
}

/// Memory usage of the node's workers and shared dictionaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub workers_lua_vms: Option<Vec<WorkerMemoryUsage>>,
    /// Shared-dictionary usage, reshaped from the upstream name→usage map.
    #[serde(deserialize_with = "named_record_list")]
    pub lua_shared_dicts: Vec<LuaSharedDict>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerMemoryUsage {
    pub http_allocated_gc: Option<String>,
    pub pid: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuaSharedDict {
    pub name: String,
    pub allocated_slabs: Option<String>,
    pub capacity: Option<String>,
}

/// One shared dictionary's usage figures as the upstream reports them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedDictUsage {
    pub allocated_slabs: Option<String>,
    pub capacity: Option<String>,
}

impl FromNamed for LuaSharedDict {
    type Entry = SharedDictUsage;

    fn from_named(name: String, usage: SharedDictUsage) -> Self {
        Self {
            name,
            allocated_slabs: usage.allocated_slabs,
            capacity: usage.capacity,
        }
    }
}

/// Connection counters of the node's HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub total_requests: Option<i64>,
    pub connections_active: Option<i64>,
    pub connections_accepted: Option<i64>,
    pub connections_handled: Option<i64>,
    pub connections_reading: Option<i64>,
    pub connections_writing: Option<i64>,
    pub connections_waiting: Option<i64>,
}
