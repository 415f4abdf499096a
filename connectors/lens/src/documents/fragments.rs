//! Shared GraphQL fragment definitions.
//!
//! Each macro expands to a string literal so documents can be assembled with
//! `concat!`. GraphQL rejects documents with unused or duplicated fragments,
//! so documents pull in exactly one bundle: `profile_fragments!`,
//! `publication_core_fragments!` or `publication_fragments!`.

macro_rules! media_fields {
    () => {
        r"
fragment MediaFields on Media {
  url
  mimeType
}
"
    };
}

macro_rules! erc20_fields {
    () => {
        r"
fragment Erc20Fields on Erc20 {
  name
  symbol
  decimals
  address
}
"
    };
}

macro_rules! profile_fields {
    () => {
        r"
fragment ProfileFields on Profile {
  id
  name
  bio
  attributes {
    displayType
    traitType
    key
    value
  }
  isFollowedByMe
  followNftAddress
  metadata
  isDefault
  handle
  picture {
    ... on NftImage {
      contractAddress
      tokenId
      uri
      verified
    }
    ... on MediaSet {
      original {
        ...MediaFields
      }
    }
  }
  coverPicture {
    ... on NftImage {
      contractAddress
      tokenId
      uri
      verified
    }
    ... on MediaSet {
      original {
        ...MediaFields
      }
    }
  }
  ownedBy
  dispatcher {
    address
    canUseRelay
  }
  stats {
    totalFollowers
    totalFollowing
    totalPosts
    totalComments
    totalMirrors
    totalPublications
    totalCollects
  }
  followModule {
    ... on FeeFollowModuleSettings {
      type
      amount {
        asset {
          ...Erc20Fields
        }
        value
      }
      recipient
    }
    ... on ProfileFollowModuleSettings {
      type
    }
    ... on RevertFollowModuleSettings {
      type
    }
  }
}
"
    };
}

macro_rules! publication_stats_fields {
    () => {
        r"
fragment PublicationStatsFields on PublicationStats {
  totalAmountOfMirrors
  totalAmountOfCollects
  totalAmountOfComments
}
"
    };
}

macro_rules! metadata_output_fields {
    () => {
        r"
fragment MetadataOutputFields on MetadataOutput {
  name
  description
  content
  media {
    original {
      ...MediaFields
    }
  }
  attributes {
    displayType
    traitType
    value
  }
}
"
    };
}

macro_rules! collect_module_fields {
    () => {
        r"
fragment CollectModuleFields on CollectModule {
  __typename
  ... on FreeCollectModuleSettings {
    type
    followerOnly
    contractAddress
  }
  ... on FeeCollectModuleSettings {
    type
    amount {
      asset {
        ...Erc20Fields
      }
      value
    }
    recipient
    referralFee
  }
  ... on RevertCollectModuleSettings {
    type
  }
}
"
    };
}

macro_rules! reference_module_fields {
    () => {
        r"
fragment ReferenceModuleFields on ReferenceModule {
  ... on FollowOnlyReferenceModuleSettings {
    type
    contractAddress
  }
}
"
    };
}

macro_rules! post_fields {
    () => {
        r"
fragment PostFields on Post {
  id
  profile {
    ...ProfileFields
  }
  stats {
    ...PublicationStatsFields
  }
  metadata {
    ...MetadataOutputFields
  }
  createdAt
  collectModule {
    ...CollectModuleFields
  }
  referenceModule {
    ...ReferenceModuleFields
  }
  appId
  hidden
  hasCollectedByMe
}
"
    };
}

macro_rules! mirror_base_fields {
    () => {
        r"
fragment MirrorBaseFields on Mirror {
  id
  profile {
    ...ProfileFields
  }
  stats {
    ...PublicationStatsFields
  }
  metadata {
    ...MetadataOutputFields
  }
  createdAt
  collectModule {
    ...CollectModuleFields
  }
  referenceModule {
    ...ReferenceModuleFields
  }
  appId
  hidden
  hasCollectedByMe
}
"
    };
}

macro_rules! comment_base_fields {
    () => {
        r"
fragment CommentBaseFields on Comment {
  id
  profile {
    ...ProfileFields
  }
  stats {
    ...PublicationStatsFields
  }
  metadata {
    ...MetadataOutputFields
  }
  createdAt
  collectModule {
    ...CollectModuleFields
  }
  referenceModule {
    ...ReferenceModuleFields
  }
  appId
  hidden
  hasCollectedByMe
}
"
    };
}

macro_rules! comment_fields {
    () => {
        r"
fragment CommentFields on Comment {
  ...CommentBaseFields
  mainPost {
    ... on Post {
      ...PostFields
    }
    ... on Mirror {
      ...MirrorBaseFields
    }
  }
}
"
    };
}

macro_rules! mirror_fields {
    () => {
        r"
fragment MirrorFields on Mirror {
  ...MirrorBaseFields
  mirrorOf {
    ... on Post {
      ...PostFields
    }
    ... on Comment {
      ...CommentBaseFields
    }
  }
}
"
    };
}

macro_rules! compact_profile_fields {
    () => {
        r"
fragment CompactProfileFields on Profile {
  id
  name
  handle
  ownedBy
  picture {
    ... on MediaSet {
      original {
        url
        mimeType
      }
    }
  }
}
"
    };
}

macro_rules! common_paginated_result_info {
    () => {
        r"
fragment CommonPaginatedResultInfo on PaginatedResultInfo {
  prev
  next
  totalCount
}
"
    };
}

/// `ProfileFields` and everything it spreads.
macro_rules! profile_fragments {
    () => {
        concat!(profile_fields!(), media_fields!(), erc20_fields!())
    };
}

/// `PostFields` and `CommentFields` with their dependencies.
macro_rules! publication_core_fragments {
    () => {
        concat!(
            post_fields!(),
            comment_fields!(),
            comment_base_fields!(),
            mirror_base_fields!(),
            publication_stats_fields!(),
            metadata_output_fields!(),
            collect_module_fields!(),
            reference_module_fields!(),
            profile_fragments!(),
        )
    };
}

/// Every publication fragment, for documents spreading Post, Comment and Mirror.
macro_rules! publication_fragments {
    () => {
        concat!(mirror_fields!(), publication_core_fragments!())
    };
}

/// Fragments used by the notifications document.
macro_rules! notification_fragments {
    () => {
        concat!(
            r"
fragment NewFollowerNotificationFields on NewFollowerNotification {
  __typename
  createdAt
  isFollowedByMe
  wallet {
    address
    defaultProfile {
      ...CompactProfileFields
    }
  }
}

fragment NewMirrorNotificationFields on NewMirrorNotification {
  __typename
  createdAt
  profile {
    ...CompactProfileFields
  }
  publication {
    ... on Post {
      id
      metadata {
        content
      }
    }
    ... on Comment {
      id
      metadata {
        content
      }
    }
  }
}

fragment NewCollectNotificationFields on NewCollectNotification {
  __typename
  createdAt
  wallet {
    address
    defaultProfile {
      ...CompactProfileFields
    }
  }
  collectedPublication {
    __typename
    ... on Post {
      id
      metadata {
        content
      }
    }
    ... on Comment {
      id
      metadata {
        content
      }
    }
    ... on Mirror {
      id
    }
  }
}

fragment NewCommentNotificationFields on NewCommentNotification {
  __typename
  createdAt
  profile {
    ...CompactProfileFields
  }
  comment {
    id
    metadata {
      content
    }
  }
}

fragment NewMentionNotificationFields on NewMentionNotification {
  __typename
  createdAt
  mentionPublication {
    ... on Post {
      id
      metadata {
        content
      }
      profile {
        ...CompactProfileFields
      }
    }
    ... on Comment {
      id
      metadata {
        content
      }
      profile {
        ...CompactProfileFields
      }
    }
  }
}

fragment NewReactionNotificationFields on NewReactionNotification {
  __typename
  createdAt
  profile {
    ...CompactProfileFields
  }
  reaction
  publication {
    ... on Post {
      id
      metadata {
        content
      }
    }
    ... on Comment {
      id
      metadata {
        content
      }
    }
    ... on Mirror {
      id
    }
  }
}
",
            compact_profile_fields!(),
            common_paginated_result_info!(),
        )
    };
}
