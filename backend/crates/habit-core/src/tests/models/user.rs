use crate::User;

use googletest::prelude::*;

#[test]
fn given_mixed_case_email_when_user_created_then_email_normalized() {
    let user = User::new(
        "  Ada Lovelace ".to_string(),
        " Ada@Example.COM ".to_string(),
        "hash".to_string(),
    );

    assert_that!(user.email.as_str(), eq("ada@example.com"));
    assert_that!(user.fullname.as_str(), eq("Ada Lovelace"));
}

#[test]
fn given_user_when_serialized_then_password_hash_omitted() {
    let user = User::new(
        "Ada".to_string(),
        "ada@example.com".to_string(),
        "$argon2id$secret".to_string(),
    );

    let json = serde_json::to_value(&user).unwrap();

    assert_that!(json.get("password_hash"), none());
    assert_that!(json["email"].as_str(), some(eq("ada@example.com")));
}
