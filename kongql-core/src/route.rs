use serde::{Deserialize, Serialize};

use crate::entity::EntityRef;
use crate::service::Protocol;

/// Route entity — a rule set matching client requests onto a service.
///
/// Fetched from `routes`, `routes/{id}`, and `services/{id}/routes`. The
/// `service` field is the reference object Kong embeds, not a full service;
/// resolving it means re-fetching the service by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub name: Option<String>,
    pub protocols: Option<Vec<Protocol>>,
    pub hosts: Option<Vec<String>>,
    pub paths: Option<Vec<String>>,
    pub https_redirect_status_code: Option<i32>,
    pub regex_priority: Option<i32>,
    pub strip_path: Option<bool>,
    pub preserve_host: Option<bool>,
    /// Owning service, when the route is attached to one.
    pub service: Option<EntityRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_with_service_reference_deserializes() {
        let json = r#"{
            "id": "r1",
            "created_at": 1563210000,
            "name": "billing-route",
            "protocols": ["http", "https"],
            "hosts": ["api.example.com"],
            "paths": ["/billing"],
            "https_redirect_status_code": 426,
            "regex_priority": 0,
            "strip_path": true,
            "preserve_host": false,
            "service": {"id": "s1"}
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.id, "r1");
        assert_eq!(route.https_redirect_status_code, Some(426));
        assert_eq!(route.protocols.as_ref().unwrap().len(), 2);
        assert_eq!(route.service.as_ref().unwrap().id.as_deref(), Some("s1"));
    }

    #[test]
    fn unattached_route_has_no_service() {
        let json = r#"{"id":"r2","service":null}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert!(route.service.is_none());
    }

    #[test]
    fn minimal_route_deserializes() {
        let route: Route = serde_json::from_str(r#"{"id":"r3"}"#).unwrap();
        assert_eq!(route.id, "r3");
        assert!(route.hosts.is_none());
        assert!(route.strip_path.is_none());
    }
}
