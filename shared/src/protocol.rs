//! Typed endpoint definitions.
//!
//! Every call the console makes is described by a request type implementing
//! [`ApiRequest`], so the HTTP client can stay generic: serialize the body,
//! hit `METHOD path()`, decode the envelope into `Response`.

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Account, LoginData, LoginRequest, ParkingLot, ParkingMode, Price, Role, StaffMember, User,
    Vehicle, VehicleType,
};

/// HTTP methods used by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that binds a request to its method, path and response type.
///
/// `path()` is relative to the configured API base; it is a method rather
/// than a constant because item routes embed an identifier.
pub trait ApiRequest {
    /// JSON body of the request, `()` for body-less calls.
    type Body: Serialize;
    /// What the envelope's `data` field decodes into.
    type Response: DeserializeOwned;

    const METHOD: HttpMethod;

    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

// =========================================================
// Auth endpoints
// =========================================================

impl ApiRequest for LoginRequest {
    type Body = LoginRequest;
    type Response = LoginData;

    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

/// Asks the backend whether the presented token is still good.
/// Only the status widget calls this; the route guard never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCheckRequest;

impl ApiRequest for SessionCheckRequest {
    type Body = ();
    type Response = bool;

    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/auth/session".to_string()
    }
}

/// Best-effort server-side invalidation; the client clears local state
/// no matter how this call ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Body = ();
    type Response = bool;

    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/logout".to_string()
    }
}

// =========================================================
// Resource endpoints (one conventional REST set per record)
// =========================================================

macro_rules! resource_protocol {
    ($entity:ident, $collection:literal, $list:ident, $create:ident, $update:ident, $delete:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $list;

        impl ApiRequest for $list {
            type Body = ();
            type Response = Vec<$entity>;

            const METHOD: HttpMethod = HttpMethod::Get;

            fn path(&self) -> String {
                concat!("/", $collection).to_string()
            }
        }

        #[derive(Debug, Clone, PartialEq)]
        pub struct $create(pub $entity);

        impl ApiRequest for $create {
            type Body = $entity;
            type Response = $entity;

            const METHOD: HttpMethod = HttpMethod::Post;

            fn path(&self) -> String {
                concat!("/", $collection).to_string()
            }

            fn body(&self) -> Option<&Self::Body> {
                Some(&self.0)
            }
        }

        #[derive(Debug, Clone, PartialEq)]
        pub struct $update {
            pub id: String,
            pub record: $entity,
        }

        impl ApiRequest for $update {
            type Body = $entity;
            type Response = $entity;

            const METHOD: HttpMethod = HttpMethod::Put;

            fn path(&self) -> String {
                format!(concat!("/", $collection, "/{}"), self.id)
            }

            fn body(&self) -> Option<&Self::Body> {
                Some(&self.record)
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $delete {
            pub id: String,
        }

        impl ApiRequest for $delete {
            type Body = ();
            type Response = bool;

            const METHOD: HttpMethod = HttpMethod::Delete;

            fn path(&self) -> String {
                format!(concat!("/", $collection, "/{}"), self.id)
            }
        }
    };
}

resource_protocol!(User, "users", ListUsers, CreateUser, UpdateUser, DeleteUser);
resource_protocol!(StaffMember, "staff", ListStaff, CreateStaff, UpdateStaff, DeleteStaff);
resource_protocol!(Vehicle, "vehicles", ListVehicles, CreateVehicle, UpdateVehicle, DeleteVehicle);
resource_protocol!(
    VehicleType,
    "vehicle-types",
    ListVehicleTypes,
    CreateVehicleType,
    UpdateVehicleType,
    DeleteVehicleType
);
resource_protocol!(
    ParkingLot,
    "parking-lots",
    ListParkingLots,
    CreateParkingLot,
    UpdateParkingLot,
    DeleteParkingLot
);
resource_protocol!(
    ParkingMode,
    "parking-modes",
    ListParkingModes,
    CreateParkingMode,
    UpdateParkingMode,
    DeleteParkingMode
);
resource_protocol!(Price, "prices", ListPrices, CreatePrice, UpdatePrice, DeletePrice);
resource_protocol!(Account, "accounts", ListAccounts, CreateAccount, UpdateAccount, DeleteAccount);
resource_protocol!(Role, "roles", ListRoles, CreateRole, UpdateRole, DeleteRole);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_goes_to_the_unified_endpoint() {
        let req = LoginRequest {
            identifier: "staff1".into(),
            password: "secret".into(),
        };
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert_eq!(req.path(), "/auth/login");
        assert!(req.body().is_some());
    }

    #[test]
    fn item_routes_embed_the_identifier() {
        let update = UpdateVehicle {
            id: "v42".into(),
            record: Vehicle::default(),
        };
        assert_eq!(update.path(), "/vehicles/v42");
        assert_eq!(UpdateVehicle::METHOD, HttpMethod::Put);

        let delete = DeleteParkingLot { id: "L7".into() };
        assert_eq!(delete.path(), "/parking-lots/L7");
        assert_eq!(DeleteParkingLot::METHOD, HttpMethod::Delete);
    }

    #[test]
    fn collection_routes_have_no_trailing_segment() {
        assert_eq!(ListPrices.path(), "/prices");
        assert_eq!(ListVehicleTypes.path(), "/vehicle-types");
        let create = CreateRole(Role::default());
        assert_eq!(create.path(), "/roles");
    }

    #[test]
    fn list_and_delete_requests_carry_no_body() {
        assert!(ListUsers.body().is_none());
        assert!(DeleteUser { id: "u1".into() }.body().is_none());
    }
}
