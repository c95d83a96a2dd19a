use tapcard_backend::config::JwtConfig;
use tapcard_backend::util::authz::{authorize, AuthzError, Role};
use tapcard_backend::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

fn create_test_jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::default())
}

#[test]
fn test_jwt_utils_creation() {
    let jwt_utils = create_test_jwt_utils();
    assert!(!jwt_utils.jwt_config.jwt_secret.is_empty());
    assert!(jwt_utils.jwt_config.access_token_expiration > 0);
}

#[test]
fn test_generate_access_token_success() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils
        .generate_access_token("user123", "user@example.com", "user")
        .expect("token");
    assert!(!token.is_empty());

    let claims = jwt_utils.validate_access_token(&token).expect("claims");
    assert_eq!(claims.sub, "user123");
    assert_eq!(claims.email, "user@example.com");
    assert_eq!(claims.role, "user");
    assert_eq!(claims.token_type, "access");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_validate_tampered_token_fails() {
    let jwt_utils = create_test_jwt_utils();
    let token = jwt_utils
        .generate_access_token("user123", "user@example.com", "user")
        .expect("token");

    let mut tampered = token.clone();
    tampered.push('x');
    assert!(jwt_utils.validate_access_token(&tampered).is_err());
}

#[test]
fn test_validate_token_signed_with_other_secret_fails() {
    let jwt_utils = create_test_jwt_utils();
    let other = JwtTokenUtilsImpl::new(JwtConfig {
        jwt_secret: "another_secret_key_that_is_also_long_enough_for_hs256".to_string(),
        access_token_expiration: 15,
    });

    let token = other
        .generate_access_token("user123", "user@example.com", "admin")
        .expect("token");
    assert!(jwt_utils.validate_access_token(&token).is_err());
}

#[test]
fn test_extract_token_from_header() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils
        .extract_token_from_header("Bearer abc.def.ghi")
        .expect("token");
    assert_eq!(token, "abc.def.ghi");

    assert!(jwt_utils.extract_token_from_header("abc.def.ghi").is_err());
    assert!(jwt_utils.extract_token_from_header("Bearer ").is_err());
    assert!(jwt_utils.extract_token_from_header("Basic abc").is_err());
}

#[test]
fn test_role_parsing() {
    assert_eq!("user".parse::<Role>(), Ok(Role::User));
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("superadmin".parse::<Role>(), Ok(Role::Superadmin));
    assert!("root".parse::<Role>().is_err());
}

#[test]
fn test_authorize_without_principal_is_unauthenticated() {
    let result = authorize(None, &[Role::Admin]);
    assert_eq!(result.unwrap_err(), AuthzError::Unauthenticated);
}

#[test]
fn test_authorize_wrong_role_is_forbidden() {
    let result = authorize(Some(Role::User), &[Role::Admin, Role::Superadmin]);
    assert_eq!(result.unwrap_err(), AuthzError::Forbidden);
}

#[test]
fn test_authorize_member_role_is_allowed() {
    assert!(authorize(Some(Role::Admin), &[Role::Admin, Role::Superadmin]).is_ok());
    assert!(authorize(Some(Role::Superadmin), &[Role::Admin, Role::Superadmin]).is_ok());
    assert!(authorize(Some(Role::User), &[Role::User]).is_ok());
}
