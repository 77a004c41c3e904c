use super::UPDATE_FIELDS;
use crate::descriptor::{HttpMethod, OperationDescriptor, PaginationMode, ParamBinding};

const USER_ID: &[ParamBinding] = &[ParamBinding::id("user_id", "userId")];

pub(super) static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::new("account", "get", HttpMethod::Get, "/account")
        .with_summary("Get the account profile"),
    OperationDescriptor::new("account", "update", HttpMethod::Patch, "/account")
        .with_summary("Update the account profile")
        .with_body_collection(UPDATE_FIELDS),
    OperationDescriptor::new("account", "getQuota", HttpMethod::Get, "/account/quota")
        .with_summary("Get storage and encoding quotas"),
    OperationDescriptor::new("account", "getUsers", HttpMethod::Get, "/account/users")
        .with_summary("List account users")
        .with_pagination(PaginationMode::PagePerPage),
    OperationDescriptor::new("account", "getUser", HttpMethod::Get, "/account/users/{user_id}")
        .with_summary("Get an account user")
        .with_path_params(USER_ID),
    OperationDescriptor::new("account", "inviteUser", HttpMethod::Post, "/account/users")
        .with_summary("Invite a user to the account")
        .with_body_fields(&[
            ParamBinding::string("email", "email").required(),
            ParamBinding::string("role", "role"),
        ]),
    OperationDescriptor::new("account", "updateUser", HttpMethod::Patch, "/account/users/{user_id}")
        .with_summary("Change the role of an account user")
        .with_path_params(USER_ID)
        .with_body_fields(&[ParamBinding::string("role", "role").required()]),
    OperationDescriptor::new("account", "removeUser", HttpMethod::Delete, "/account/users/{user_id}")
        .with_summary("Remove a user from the account")
        .with_path_params(USER_ID),
];
