//! Publication reads and the typed-data mutations that create publications.

use lens_graphql::OperationKind;

use super::{Document, Projection};

pub const PUBLICATION: Document = Document {
    name: "get_publication",
    operation_name: "Publication",
    kind: OperationKind::Query,
    text: concat!(
        r"query Publication($publicationId: InternalPublicationId!) {
  publication(request: { publicationId: $publicationId }) {
    __typename
    ... on Post {
      ...PostFields
    }
    ... on Comment {
      ...CommentFields
    }
    ... on Mirror {
      ...MirrorFields
    }
  }
}
",
        publication_fragments!()
    ),
    variables: &["publicationId"],
    projection: Projection::Field(&["publication"]),
    auth: false,
};

pub const TIMELINE: Document = Document {
    name: "get_timeline",
    operation_name: "Timeline",
    kind: OperationKind::Query,
    text: concat!(
        r"query Timeline($profile: ProfileId!) {
  timeline(request: { profileId: $profile, limit: 10 }) {
    items {
      __typename
      ... on Post {
        ...PostFields
      }
      ... on Comment {
        ...CommentFields
      }
      ... on Mirror {
        ...MirrorFields
      }
    }
    pageInfo {
      prev
      next
      totalCount
    }
  }
}
",
        publication_fragments!()
    ),
    variables: &["profile"],
    projection: Projection::Field(&["timeline", "items"]),
    auth: false,
};

pub const FEED: Document = Document {
    name: "get_feed",
    operation_name: "Feed",
    kind: OperationKind::Query,
    text: concat!(
        r"query Feed($profile: ProfileId!) {
  feed(request: { profileId: $profile, limit: 50 }) {
    items {
      root {
        ... on Post {
          ...PostFields
        }
        ... on Comment {
          ...CommentFields
        }
      }
      electedMirror {
        mirrorId
        profile {
          id
          handle
        }
        timestamp
      }
      mirrors {
        profile {
          id
          handle
        }
        timestamp
      }
      collects {
        profile {
          id
          handle
        }
        timestamp
      }
      reactions {
        profile {
          id
          handle
        }
        reaction
        timestamp
      }
      comments {
        ...CommentFields
      }
    }
    pageInfo {
      prev
      next
      totalCount
    }
  }
}
",
        publication_core_fragments!()
    ),
    variables: &["profile"],
    projection: Projection::Field(&["feed", "items"]),
    auth: false,
};

pub const CREATE_POST: Document = Document {
    name: "create_post",
    operation_name: "CreatePostTypedData",
    kind: OperationKind::Mutation,
    text: r"mutation CreatePostTypedData($profile: ProfileId!, $contentURI: Url!) {
  createPostTypedData(
    request: {
      profileId: $profile
      contentURI: $contentURI
      collectModule: { revertCollectModule: true }
      referenceModule: { followerOnlyReferenceModule: false }
    }
  ) {
    id
    expiresAt
    typedData {
      types {
        PostWithSig {
          name
          type
        }
      }
      domain {
        name
        chainId
        version
        verifyingContract
      }
      value {
        nonce
        deadline
        profileId
        contentURI
        collectModule
        collectModuleInitData
        referenceModule
        referenceModuleInitData
      }
    }
  }
}
",
    variables: &["profile", "contentURI"],
    projection: Projection::Root,
    auth: true,
};

pub const CREATE_COMMENT: Document = Document {
    name: "create_comment",
    operation_name: "CreateCommentTypedData",
    kind: OperationKind::Mutation,
    text: r"mutation CreateCommentTypedData(
  $profile: ProfileId!
  $contentURI: Url!
  $publicationId: InternalPublicationId!
) {
  createCommentTypedData(
    request: {
      profileId: $profile
      publicationId: $publicationId
      contentURI: $contentURI
      collectModule: { revertCollectModule: true }
      referenceModule: { followerOnlyReferenceModule: false }
    }
  ) {
    id
    expiresAt
    typedData {
      types {
        CommentWithSig {
          name
          type
        }
      }
      domain {
        name
        chainId
        version
        verifyingContract
      }
      value {
        nonce
        deadline
        profileId
        profileIdPointed
        pubIdPointed
        contentURI
        referenceModuleData
        collectModule
        collectModuleInitData
        referenceModule
        referenceModuleInitData
      }
    }
  }
}
",
    variables: &["profile", "contentURI", "publicationId"],
    projection: Projection::Root,
    auth: true,
};

pub const CREATE_MIRROR: Document = Document {
    name: "mirror_post",
    operation_name: "CreateMirrorTypedData",
    kind: OperationKind::Mutation,
    text: r"mutation CreateMirrorTypedData(
  $profile: ProfileId!
  $publicationId: InternalPublicationId!
) {
  createMirrorTypedData(
    request: {
      profileId: $profile
      publicationId: $publicationId
      referenceModule: { followerOnlyReferenceModule: false }
    }
  ) {
    id
    expiresAt
    typedData {
      types {
        MirrorWithSig {
          name
          type
        }
      }
      domain {
        name
        chainId
        version
        verifyingContract
      }
      value {
        nonce
        deadline
        profileId
        profileIdPointed
        pubIdPointed
        referenceModule
        referenceModuleData
        referenceModuleInitData
      }
    }
  }
}
",
    variables: &["profile", "publicationId"],
    projection: Projection::Root,
    auth: true,
};

pub const ADD_REACTION: Document = Document {
    name: "add_reaction",
    operation_name: "AddReaction",
    kind: OperationKind::Mutation,
    text: r"mutation AddReaction(
  $profile: ProfileId!
  $publicationId: InternalPublicationId!
  $reaction: ReactionTypes!
) {
  addReaction(
    request: {
      profileId: $profile
      reaction: $reaction
      publicationId: $publicationId
    }
  )
}
",
    variables: &["profile", "publicationId", "reaction"],
    projection: Projection::Root,
    auth: true,
};
