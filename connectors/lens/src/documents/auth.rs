//! Challenge/response authentication documents.

use lens_graphql::OperationKind;

use super::{Document, Projection};

pub const CHALLENGE: Document = Document {
    name: "get_challenge",
    operation_name: "Challenge",
    kind: OperationKind::Query,
    text: r"query Challenge($address: EthereumAddress!) {
  challenge(request: { address: $address }) {
    text
  }
}
",
    variables: &["address"],
    projection: Projection::Field(&["challenge", "text"]),
    auth: false,
};

pub const AUTHENTICATE: Document = Document {
    name: "authenticate_sig",
    operation_name: "Authenticate",
    kind: OperationKind::Mutation,
    text: r"mutation Authenticate($address: EthereumAddress!, $signature: Signature!) {
  authenticate(request: { address: $address, signature: $signature }) {
    accessToken
    refreshToken
  }
}
",
    variables: &["address", "signature"],
    projection: Projection::Field(&["authenticate"]),
    auth: false,
};

pub const REFRESH: Document = Document {
    name: "get_new_access_token",
    operation_name: "Refresh",
    kind: OperationKind::Mutation,
    text: r"mutation Refresh($refreshToken: Jwt!) {
  refresh(request: { refreshToken: $refreshToken }) {
    accessToken
    refreshToken
  }
}
",
    variables: &["refreshToken"],
    projection: Projection::Field(&["refresh"]),
    auth: false,
};

pub const VERIFY: Document = Document {
    name: "verify_session",
    operation_name: "Verify",
    kind: OperationKind::Query,
    text: r"query Verify($accessToken: Jwt!) {
  verify(request: { accessToken: $accessToken })
}
",
    variables: &["accessToken"],
    projection: Projection::Field(&["verify"]),
    auth: false,
};
