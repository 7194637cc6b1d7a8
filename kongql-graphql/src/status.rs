use async_graphql::Object;

use kongql_core::status;

/// Node usage snapshot: connections, database reachability, memory.
pub struct Status(pub kongql_core::Status);

#[Object(rename_fields = "snake_case")]
impl Status {
    async fn database(&self) -> Option<DatabaseStatus> {
        self.0.database.clone().map(DatabaseStatus)
    }

    async fn memory(&self) -> MemoryUsage {
        MemoryUsage(self.0.memory.clone())
    }

    async fn server(&self) -> Option<ServerStatus> {
        self.0.server.clone().map(ServerStatus)
    }
}

/// State of the node's database connection.
pub struct DatabaseStatus(pub status::DatabaseStatus);

#[Object(rename_fields = "snake_case")]
impl DatabaseStatus {
    async fn reachable(&self) -> Option<bool> {
        self.0.reachable
    }
}

/// Memory usage of the node's workers and shared dictionaries.
pub struct MemoryUsage(pub status::MemoryUsage);

#[Object(rename_fields = "snake_case")]
impl MemoryUsage {
    async fn workers_lua_vms(&self) -> Option<Vec<WorkerMemoryUsage>> {
        self.0
            .workers_lua_vms
            .as_ref()
            .map(|workers| workers.iter().cloned().map(WorkerMemoryUsage).collect())
    }

    /// Shared-dictionary usage, in the order the node reports it.
    async fn lua_shared_dicts(&self) -> Vec<LuaSharedDict> {
        self.0
            .lua_shared_dicts
            .iter()
            .cloned()
            .map(LuaSharedDict)
            .collect()
    }
}

pub struct WorkerMemoryUsage(pub status::WorkerMemoryUsage);

#[Object(rename_fields = "snake_case")]
impl WorkerMemoryUsage {
    async fn http_allocated_gc(&self) -> Option<&str> {
        self.0.http_allocated_gc.as_deref()
    }

    async fn pid(&self) -> Option<i32> {
        self.0.pid
    }
}

pub struct LuaSharedDict(pub status::LuaSharedDict);

#[Object(rename_fields = "snake_case")]
impl LuaSharedDict {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn allocated_slabs(&self) -> Option<&str> {
        self.0.allocated_slabs.as_deref()
    }

    async fn capacity(&self) -> Option<&str> {
        self.0.capacity.as_deref()
    }
}

/// Connection counters of the node's HTTP server.
pub struct ServerStatus(pub status::ServerStatus);

#[Object(rename_fields = "snake_case")]
impl ServerStatus {
    async fn total_requests(&self) -> Option<i64> {
        self.0.total_requests
    }

    async fn connections_active(&self) -> Option<i64> {
        self.0.connections_active
    }

    async fn connections_accepted(&self) -> Option<i64> {
        self.0.connections_accepted
    }

    async fn connections_handled(&self) -> Option<i64> {
        self.0.connections_handled
    }

    async fn connections_reading(&self) -> Option<i64> {
        self.0.connections_reading
    }

    async fn connections_writing(&self) -> Option<i64> {
        self.0.connections_writing
    }

    async fn connections_waiting(&self) -> Option<i64> {
        self.0.connections_waiting
    }
}
