//! Discovery and health-check documents.

use lens_graphql::OperationKind;

use super::{Document, Projection};

pub const PING: Document = Document {
    name: "check_ping",
    operation_name: "Ping",
    kind: OperationKind::Query,
    text: r"query Ping {
  ping
}
",
    variables: &[],
    projection: Projection::Root,
    auth: false,
};

// Sort criteria: TOP_COMMENTED, TOP_COLLECTED, TOP_MIRRORED, LATEST, CURATED_PROFILES.
pub const EXPLORE_PUBLICATIONS: Document = Document {
    name: "explore_publications",
    operation_name: "ExplorePublications",
    kind: OperationKind::Query,
    text: concat!(
        r"query ExplorePublications {
  explorePublications(
    request: {
      sortCriteria: TOP_COMMENTED
      publicationTypes: [POST, COMMENT, MIRROR]
      limit: 10
    }
  ) {
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
    variables: &[],
    projection: Projection::Field(&["explorePublications", "items"]),
    auth: false,
};

pub const EXPLORE_PROFILES: Document = Document {
    name: "explore_profiles",
    operation_name: "ExploreProfiles",
    kind: OperationKind::Query,
    text: concat!(
        r"query ExploreProfiles {
  exploreProfiles(request: { sortCriteria: MOST_FOLLOWERS }) {
    items {
      ...ProfileFields
    }
    pageInfo {
      prev
      next
      totalCount
    }
  }
}
",
        profile_fragments!()
    ),
    variables: &[],
    projection: Projection::Field(&["exploreProfiles", "items"]),
    auth: false,
};

// The search type is pinned to PROFILE; PUBLICATION results have a different shape.
pub const SEARCH: Document = Document {
    name: "search_lens",
    operation_name: "Search",
    kind: OperationKind::Query,
    text: concat!(
        r"query Search($query: Search!) {
  search(request: { query: $query, type: PROFILE, limit: 10 }) {
    ... on ProfileSearchResult {
      __typename
      items {
        ... on Profile {
          ...ProfileFields
        }
      }
      pageInfo {
        prev
        totalCount
        next
      }
    }
  }
}
",
        profile_fragments!()
    ),
    variables: &["query"],
    projection: Projection::Field(&["search", "items"]),
    auth: false,
};

pub const HAS_TX_BEEN_INDEXED: Document = Document {
    name: "check_transaction_indexed",
    operation_name: "HasTxHashBeenIndexed",
    kind: OperationKind::Query,
    text: r"query HasTxHashBeenIndexed($txHash: TxHash!) {
  hasTxHashBeenIndexed(request: { txHash: $txHash }) {
    ... on TransactionIndexedResult {
      indexed
      txReceipt {
        ...TxReceiptFields
      }
      metadataStatus {
        status
        reason
      }
    }
    ... on TransactionError {
      reason
      txReceipt {
        ...TxReceiptFields
      }
    }
    __typename
  }
}

fragment TxReceiptFields on TransactionReceipt {
  to
  from
  contractAddress
  transactionIndex
  root
  gasUsed
  logsBloom
  blockHash
  transactionHash
  blockNumber
  confirmations
  cumulativeGasUsed
  effectiveGasPrice
  byzantium
  type
  status
  logs {
    blockNumber
    blockHash
    transactionIndex
    removed
    address
    data
    topics
    transactionHash
    logIndex
  }
}
",
    variables: &["txHash"],
    projection: Projection::Root,
    auth: false,
};
