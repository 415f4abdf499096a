//! Profile, follow graph and notification documents.

use lens_graphql::OperationKind;

use super::{Document, Projection};

pub const PROFILE: Document = Document {
    name: "get_profile",
    operation_name: "Profile",
    kind: OperationKind::Query,
    text: concat!(
        r"query Profile($handle: Handle) {
  profile(request: { handle: $handle }) {
    ...ProfileFields
  }
}
",
        profile_fragments!()
    ),
    variables: &["handle"],
    projection: Projection::Field(&["profile"]),
    auth: false,
};

pub const DEFAULT_PROFILE: Document = Document {
    name: "get_default_profile",
    operation_name: "DefaultProfile",
    kind: OperationKind::Query,
    text: concat!(
        r"query DefaultProfile($address: EthereumAddress!) {
  defaultProfile(request: { ethereumAddress: $address }) {
    ...ProfileFields
  }
}
",
        profile_fragments!()
    ),
    variables: &["address"],
    projection: Projection::Field(&["defaultProfile"]),
    auth: false,
};

pub const CREATE_PROFILE: Document = Document {
    name: "create_new_user",
    operation_name: "CreateProfile",
    kind: OperationKind::Mutation,
    text: r"mutation CreateProfile($handle: CreateHandle!) {
  createProfile(
    request: {
      handle: $handle
      profilePictureUri: null
      followNFTURI: null
      followModule: null
    }
  ) {
    ... on RelayerResult {
      txHash
    }
    ... on RelayError {
      reason
    }
    __typename
  }
}
",
    variables: &["handle"],
    projection: Projection::Root,
    auth: true,
};

pub const FOLLOW: Document = Document {
    name: "follow_profile",
    operation_name: "CreateFollowTypedData",
    kind: OperationKind::Mutation,
    text: r"mutation CreateFollowTypedData($profile: ProfileId!) {
  createFollowTypedData(
    request: { follow: [{ profile: $profile, followModule: null }] }
  ) {
    id
    expiresAt
    typedData {
      domain {
        name
        chainId
        version
        verifyingContract
      }
      types {
        FollowWithSig {
          name
          type
        }
      }
      value {
        nonce
        deadline
        profileIds
        datas
      }
    }
  }
}
",
    variables: &["profile"],
    projection: Projection::Field(&["createFollowTypedData"]),
    auth: true,
};

pub const UNFOLLOW: Document = Document {
    name: "unfollow_profile",
    operation_name: "CreateUnfollowTypedData",
    kind: OperationKind::Mutation,
    text: r"mutation CreateUnfollowTypedData($profile: ProfileId!) {
  createUnfollowTypedData(request: { profile: $profile }) {
    id
    expiresAt
    typedData {
      types {
        BurnWithSig {
          name
          type
        }
      }
      domain {
        version
        chainId
        name
        verifyingContract
      }
      value {
        nonce
        deadline
        tokenId
      }
    }
  }
}
",
    variables: &["profile"],
    projection: Projection::Field(&["createUnfollowTypedData"]),
    auth: true,
};

pub const NOTIFICATIONS: Document = Document {
    name: "get_all_notifications",
    operation_name: "Notifications",
    kind: OperationKind::Query,
    text: concat!(
        r"query Notifications($profile: ProfileId!) {
  result: notifications(request: { profileId: $profile, limit: 10 }) {
    items {
      ... on NewFollowerNotification {
        notificationId
        ...NewFollowerNotificationFields
      }
      ... on NewMirrorNotification {
        notificationId
        ...NewMirrorNotificationFields
      }
      ... on NewCollectNotification {
        notificationId
        ...NewCollectNotificationFields
      }
      ... on NewCommentNotification {
        notificationId
        ...NewCommentNotificationFields
      }
      ... on NewMentionNotification {
        notificationId
        ...NewMentionNotificationFields
      }
      ... on NewReactionNotification {
        notificationId
        ...NewReactionNotificationFields
      }
    }
    pageInfo {
      ...CommonPaginatedResultInfo
    }
  }
}
",
        notification_fragments!()
    ),
    variables: &["profile"],
    projection: Projection::Root,
    auth: false,
};

pub const NFTS: Document = Document {
    name: "get_nfts",
    operation_name: "Nfts",
    kind: OperationKind::Query,
    text: r"query Nfts($address: EthereumAddress!) {
  nfts(request: { ownerAddress: $address, limit: 10, chainIds: [1] }) {
    items {
      contractName
      contractAddress
      symbol
      tokenId
      owners {
        amount
        address
      }
      name
      description
      contentURI
      originalContent {
        uri
        metaType
      }
      chainId
      collectionName
      ercType
    }
    pageInfo {
      prev
      next
      totalCount
    }
  }
}
",
    variables: &["address"],
    projection: Projection::Field(&["nfts", "items"]),
    auth: false,
};
