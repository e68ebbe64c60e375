//! Method names understood by the node

// chain
pub const GET_PEER_INFO: &str = "getpeerinfo";
pub const GET_BLOCK_HEADER: &str = "getblockheader";
pub const GET_INFO: &str = "getinfo";
pub const GET_BLOCK: &str = "getblock";
pub const GET_TX: &str = "gettx";

// account
pub const DUMP_KEYFILE: &str = "dumpkeyfile";
pub const IMPORT_KEYFILE: &str = "importkeyfile";
pub const GET_NEW_ACCOUNT: &str = "getnewaccount";
pub const GET_ACCOUNT: &str = "getaccount";
pub const GET_NEW_ADDRESS: &str = "getnewaddress";
pub const LIST_ADDRESSES: &str = "listaddresses";
pub const VALIDATE_ADDRESS: &str = "validateaddress";
pub const DELETE_ACCOUNT: &str = "deleteaccount";
pub const IMPORT_ACCOUNT: &str = "importaccount";
pub const CHANGE_PASSWD: &str = "changepasswd";
pub const GET_PUBLIC_KEY: &str = "getpublickey";
pub const GET_BALANCE: &str = "getbalance";
pub const LIST_BALANCES: &str = "listbalances";

// multisig
pub const GET_NEW_MULTISIG: &str = "getnewmultisig";
pub const LIST_MULTISIG: &str = "listmultisig";
pub const DELETE_MULTISIG: &str = "deletemultisig";
pub const CREATE_MULTISIG_TX: &str = "createmultisigtx";
pub const SIGN_MULTISIG_TX: &str = "signmultisigtx";

// did
pub const ISSUE_DID: &str = "issuedid";
pub const LIST_DIDS: &str = "listdids";
pub const DID_MODIFY_ADDRESS: &str = "didmodifyaddress";
pub const LIST_DID_ADDRESSES: &str = "listdidaddresses";
pub const DID_SEND: &str = "didsend";
pub const DID_SEND_MORE: &str = "didsendmore";
pub const DID_SEND_FROM: &str = "didsendfrom";
pub const DID_SEND_ASSET: &str = "didsendasset";
pub const DID_SEND_ASSET_FROM: &str = "didsendassetfrom";

// asset
pub const GET_ASSET: &str = "getasset";
pub const GET_ADDRESS_ASSET: &str = "getaddressasset";
pub const GET_ACCOUNT_ASSET: &str = "getaccountasset";
pub const CREATE_ASSET: &str = "createasset";
pub const DELETE_LOCAL_ASSET: &str = "deletelocalasset";
pub const ISSUE: &str = "issue";
pub const ISSUE_FROM: &str = "issuefrom";
pub const LIST_ASSETS: &str = "listassets";
pub const SEND_ASSET: &str = "sendasset";
pub const SEND_ASSET_FROM: &str = "sendassetfrom";
pub const BURN: &str = "burn";
pub const ISSUE_CERT: &str = "issuecert";
pub const TRANSFER_CERT: &str = "transfercert";
pub const SECONDARY_ISSUE: &str = "secondaryissue";

// transfer
pub const SEND: &str = "send";
pub const SEND_FROM: &str = "sendfrom";
pub const SEND_MORE: &str = "sendmore";
pub const LIST_TXS: &str = "listtxs";
pub const CREATE_RAW_TX: &str = "createrawtx";
pub const SIGN_RAW_TX: &str = "signrawtx";
pub const DECODE_RAW_TX: &str = "decoderawtx";
pub const SEND_RAW_TX: &str = "sendrawtx";

// mining
pub const SET_MINING_ACCOUNT: &str = "setminingaccount";
pub const START_MINING: &str = "startmining";
pub const SUBMIT_WORK: &str = "submitwork";
/// Served on the v3 endpoint
pub const ETH_SUBMIT_WORK: &str = "eth_submitWork";
/// Served on the v3 endpoint
pub const ETH_GET_WORK: &str = "eth_getWork";
