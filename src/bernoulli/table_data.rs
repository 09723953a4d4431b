//! Offline-generated embedded Bernoulli numerator/denominator table.
//!
//! Data for B2..B512 (256 entries), generated once from the standard
//! Bernoulli recurrence and checked against known published values; see
//! DESIGN.md for provenance. Do not hand-edit: regenerate from the
//! recurrence if `BERN_TABLE_LEN` changes.

/// Number of precomputed even Bernoulli numbers (B2..B512).
pub(crate) const BERN_TABLE_LEN: usize = 256;

/// One table entry: a byte offset/length into a shared segment array,
/// plus sign. Mirrors the original `cbigint` view: segments are borrowed,
/// never copied, at lookup time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableSlice {
    pub offset: u32,
    pub len: u32,
    pub neg: bool,
}

pub(crate) static NUM_SEGMENTS: &[u64] = &[
    0x0000000000000001, 0x0000000000000001, 0x0000000000000001, 0x0000000000000001, 0x0000000000000005, 0x00000000000002b3, 0x0000000000000007, 0x0000000000000e21,
    0x000000000000ab5b, 0x000000000002aa13, 0x00000000000d09f1, 0x000000000e16a13b, 0x000000000082828f, 0x0000000587940425, 0x000007d60828a065, 0x00000702f7579541,
    0x000002582a2b4cbf, 0x6d32a00d9fb1c9fd, 0x0000000000000001, 0x000a68d05e6db797, 0x274025326e284f03, 0x000000000000000e, 0x6797b1522cd66903, 0x0000000000000052,
    0xd8358f64539cfe0f, 0x00000000000005e4, 0xadf6e53c97429c89, 0x0000000000007e4d, 0xf3642920c21b3e7b, 0x00000000121ffd5d, 0xdf10bb0f95fbe655, 0x0000000001998070,
    0x2b9dbb0b05a55f6d, 0x0000000a1cb4bfde, 0xc7eda8fe2a855f53, 0x0000016fec9cc680, 0xf5724965ae76237d, 0x00007a3e56a20769, 0x33a99b09efe92f35, 0x0010455d1d809ea7,
    0x5047daa8a7e64393, 0x3fcd77896a343f43, 0x0000000000000df3, 0xd9547361f5e55927, 0x094101af5d50d145, 0x7f11711cae210b81, 0xcf399b169aabfc7c, 0x0000000000000139,
    0x5feb781d2a70b25d, 0x847fd77286dff384, 0x000000000042089e, 0xb76765ed9a363c79, 0x6d0164e132c16ca9, 0x0000000000038845, 0x340ad867515a816b, 0x0f1d5e8b97a3a66f,
    0x0000000107afa25e, 0xd17be20c9315664d, 0x12515c307e590205, 0x003cd8c09a3e273f, 0x22d78d2246e465af, 0x0323a2d34fc8423e, 0x000000175e375b58, 0xbcfbfefeca7ffb09,
    0xd6ce058ef0e2f29a, 0x000041e5b24381a3, 0x774cc3b79eb45c9f, 0xf685050b1191ea30, 0x10eb32b9dc714e8b, 0xb6fe7c5d41f609a3, 0x0e0046e172e59e07, 0x6cd6d086747768a8,
    0x00000000000002dd, 0xa5075f246809594d, 0x82f2c644816bfbb7, 0x29ecac4470d12bc3, 0x000000000000010b, 0xfe6d75ca93e13f3d, 0x9f3dac68e63aa1cd, 0x1f2002a1046ff4c6,
    0x00000000133978dc, 0x962077bfd79084b7, 0x8aae8d75791166f6, 0xe95d0d91386304fb, 0x0000000000019b29, 0x2f2c2aa82f64badf, 0xd554d3d23fc9e873, 0x242495c81afbf274,
    0x00000030a4bd337b, 0xb89a85ca61976d67, 0xd852b7e8124d88bc, 0x95346a5418cce492, 0x0000aad5aa44e228, 0x6cd99b8d53e67587, 0xbe2c3fa060c5595b, 0xa120545f9d05c713,
    0x0000bbb7f42443c5, 0xd6ea05c62ebab1e7, 0xe74acaef0d671282, 0xe7ec42f88f6adc1f, 0x0000b0e2803490f4, 0xf4ff3683fcbe99bb, 0x5dd07a328ba43b65, 0x20d18760f53b1c62,
    0x6aca47d00be6048d, 0x0000000000000723, 0xed452f06f898c63f, 0xc25cf05d9fa06d10, 0x21c31e201edd6fa9, 0x9622b6a5b44a3f7a, 0x2f4d0e7b433468df, 0xb5944a5e7e797acd,
    0xe99995eda6ebf5a3, 0x997e8aeae3d14e99, 0x00000000000c7744, 0xf3b5ac7f3ff729c7, 0x397d5914f12b9cd8, 0xcdac622bb1082554, 0xaf9cfcdfecdbd340, 0x0000000001a637b3,
    0xb3d7804c77980375, 0xfb79da5f5e53b8d9, 0x0ae699a11a3f3125, 0x7abd271ace9e8a2d, 0x00000000a47b55bb, 0x04e868487e944c65, 0x21a464fd64875b1d, 0x33cf96daf35f8288,
    0x68981c301464a64b, 0x0000004923ad1715, 0xd60ca7cc5e0b9bc9, 0xccada531f98355e8, 0x503db7da1d455166, 0x49daa85deec289d3, 0x9fcdc8928d1dc292, 0x0000000000000001,
    0x22b77e46c4e5182b, 0x8059051c4734b5b1, 0x498da98a833e512f, 0xf656ecac7bfb8a23, 0x00ea97d492fb2abd, 0x605b8b714117002d, 0xbf72e68b651b4a70, 0xb52cf65682be0e00,
    0x12d42690d4b918f0, 0x0e585391ab427a9b, 0x00000000000004d9, 0x2d7159315a505c59, 0x4c9e506100f87ef8, 0xb1982767dfb2ed27, 0xe95a262f9eae6fcd, 0x2d4c90f12736d96d,
    0x000000000000000a, 0x626aa61bf9c58903, 0x50496b2f15e61fa9, 0xe27e1e7f1852f3bf, 0x70aaac1230710e43, 0x200b403e406b8cb1, 0x000000000002361b, 0x66b747e709459577,
    0x0c800670258a6429, 0xf797318a49c7e779, 0xd344a38473b331d9, 0x41950dbc20f27418, 0x0000000000029f18, 0x1097f8923a1ffa73, 0xa0e798f1f57ecf67, 0xf6f1d67e2111556a,
    0xc93a14239e876528, 0x3e33fa9dca3eb62c, 0x0055abae5049fb29, 0xdfe022dcbac570cf, 0xb9ffdfe00dd71c9a, 0xdb160a31c7881716, 0xf685b5e723599a04, 0xff479520d1e0ef11,
    0x0000000569069737, 0x7c6f0ed50c08c869, 0x31640d0b031c9949, 0x92093623086615f2, 0x4735a013929f7c0a, 0x18e5cc3bba0b9f05, 0x000028d2ee1e4628, 0xcf99f4c9e3ab07bf,
    0x895f3aa893b87fd4, 0xd795175175dfca6d, 0xdfe0d97bae982eae, 0xccf0b6455b2718a3, 0x0434cfd60bcfcbca, 0x000000000000008d, 0x5971f67262899801, 0xc0b5ea74bb8e5eab,
    0x984c9c89cfdc0712, 0xf192e34d8d53fb98, 0xbcf8504b386383f8, 0xcba32f410bf8ad4e, 0x0000000000000006, 0x6ccaf7075031cd5f, 0xc689b117dc9806bd, 0x4a69a8935a4f0d9c,
    0x25ebad9c0f35c7b8, 0x0b6e9fdd92910057, 0xfac9e66490989c30, 0x000000000000bf28, 0x2fef024abd4a948f, 0xabf4cab7c6ccfdb6, 0x4ac179a221a72207, 0x409a807e10381a27,
    0xf7d66d564491f792, 0xe9e16656322c3d1f, 0x000000026da8eb14, 0xd21d75e2b7e379d7, 0xbcdd25d28f2cff67, 0x56f16dcf6a333719, 0x52e8a20af487b367, 0x2141c728cd8b2699,
    0xab595d08e95901bf, 0x0000000000667708, 0x4f305b92094c6d09, 0x30b213ba98155679, 0x3b1cea321ccdf50c, 0x2b7e89c44050b595, 0x4e5111e2a0e8d8d1, 0x60cac802dfaaadba,
    0x000001f21474e760, 0x92bc0475351cf8ed, 0x4abc7cbb4ede97a0, 0x0bf439b143b9fd64, 0xf8e254e47ec5a252, 0xcc3a88ef03e4ffd0, 0xebbe7caac06ac603, 0x00f2fc1cf199ff39,
    0x47f8388a5c1947c1, 0xb0fc29a2c6ce0d82, 0x459f2c44c216f2c0, 0xac4f4f2849642524, 0xbf7e996bd12a326e, 0x4b35a627a5c36531, 0x86979bda57e904e0, 0x0000000000000004,
    0x4a2934e944848307, 0xe987d72b96ea3a12, 0x8f3af8040e8cb359, 0x64807627ab4efabe, 0x8989d9e23e84f98c, 0x680b9c98dabb2d78, 0x05304f3742678e34, 0xd8677a2d17bf06ed,
    0x1f0ff3d59de06343, 0xb7b0bdc1543ff458, 0xef5510b9656caf21, 0x68dc597eb3f31279, 0x712b5a188bbd7801, 0xff93a54fcf1414b9, 0x00000000fa22e4c8, 0xe11b4aebc7b0e55f,
    0xc4a3ba68c1cbc94d, 0x4969043dbbe6a15b, 0x1e72a06b25f7e411, 0xfdf231d24fcb3ebf, 0x7b7a1e64d1a209e5, 0x2ab8f4553068d227, 0x0000000000001625, 0x53a342d3dba8f28d,
    0xb66920e4dd23c2ff, 0xcbe1f5109d314e41, 0xfbd5c76a592525a5, 0x6ddc48b0a6db6639, 0xc11bb5a2c324f964, 0xce0055756d2a72fb, 0x000000008abb4070, 0xdd5f1de573417ba3,
    0x96c525ad3620948a, 0x49b6256e82028b3e, 0xb20848b1e503131e, 0xcd3de0499d764bad, 0x32cb07b0ebea931e, 0x303d12c1df241d36, 0x000243cf6c45e5f3, 0x53187949eda861a1,
    0xeaa7a2ebd799872b, 0x3bd92084545458f4, 0xc872d37f6ed5d765, 0x1479931cf23daf9d, 0x51947b47f3455958, 0x630567c6050c880b, 0x000004ad1761c335, 0xc28ccb998937afd9,
    0xb994aaea70c03feb, 0xbcff913d225748db, 0x054c31f0cc075375, 0x2fd3c37981ca9dc0, 0xb70ea33af2e98bee, 0x9408860e8050e502, 0x003226017e58d256, 0xa449d8c5d9a26e5d,
    0x97cd44046183627e, 0x9ce0fafd4f764e1e, 0x6eb264369dc354d7, 0xb0c9f5d535153418, 0x431649b5e4754fa1, 0xcd8cb2cb2b428653, 0x4c9228f47e9ca983, 0x00000000005cffdd,
    0x7641bc0b74984367, 0x753894c223677a27, 0x867caf70c8a63bf5, 0xb0044e4359358393, 0x493287850e093cb4, 0x400ec4d01e91fb6a, 0xf49a6d4ae379a5ef, 0xcdce90b494a77bcc,
    0x000000000000000c, 0x4af9d695406afc83, 0xc4d7f639b68fc655, 0xfa6df268b098c702, 0xf72eb54c698447f7, 0x91c6e3c5a9193dc3, 0xaecdfe66a63546b7, 0xd00546fe032b7154,
    0xf7b2690499cb998a, 0x0000000012da5277, 0x2668d3836c89bf91, 0xf2d67b5933c4884e, 0xef41b10bbb68600f, 0xa022af121fef8246, 0x8e102e14b6eab8c2, 0x8297d348accad23a,
    0xb6cf4511ef22f42d, 0x77781c3f72a16c48, 0x0000001b83b4f3fc, 0x41ece66b35dc377b, 0xcd891eea95d9b170, 0xd8e232ca6e18fb66, 0xb477e51ce77dbb6d, 0xc2ac152882e5fe0c,
    0x0bf841e520aaab2e, 0x85664f67d1f77e4d, 0xf16b03797f724c9d, 0x00000164a6535b7f, 0xeb97106b875a7881, 0x62aeb3a186d96739, 0x418981ab8729e006, 0x7b160262def8af19,
    0x2f8ae98690437d75, 0xac749ce2c3b04e07, 0x4bfacf08c406fe1e, 0x986108099440a43f, 0x000184f537e7aebb, 0x39ab7aa0f04ec905, 0xec59208e7db908f8, 0x135eec11925d16c6,
    0xd48cb7fae63ea812, 0x3c5ebde5b1698940, 0x175f4658f1bae9b1, 0x261765f22251a78f, 0x574d66de912bdbb8, 0xfa208c8fd9a80f6d, 0x0000000000000037, 0xbdb61b56f4ba0b45,
    0x505d53695b020710, 0x754563e9b2547dd5, 0x0a1411a2afa2d5dd, 0x3e397ad8fd028d08, 0x4892132690b33971, 0xb18b8894d921e971, 0x4b942edb28568ccd, 0xca2e631107afc7e8,
    0x28f12288b02990d5, 0x0431985ad09f54e6, 0xe1e36c6de442c511, 0xb80103285f85d56e, 0x83dc3ba219d442ba, 0xdbd88112373971c6, 0x328305a2a6e0d1ec, 0xe74b816f950cefb3,
    0xe2e11f7bca0ffbb5, 0x000000000000b4bc, 0xbcb022fd2336600b, 0x1c7b52f195e65f90, 0xb9e15922c7e230bc, 0x2f59a9817dd41133, 0x7d107a383ab6b5d6, 0x94f6f3daded91bef,
    0x6a0bb1f465a92d18, 0x20a47d220fb190aa, 0xa089ae8cbaac2c6a, 0x00000000010106e6, 0x0969b17fbc6a1a9f, 0x33f487f8d72f5693, 0xd4f5ad5b4b1e47d1, 0xd52985fab0cc5457,
    0xce67b56cd8a88625, 0x2742a8e80f9ed527, 0xb5842236221f6f60, 0x47664fa5713b3fec, 0xa2a171dee48c0420, 0x0000050911df8831, 0x67cffb9a3910fbad, 0x1bc3808ba0685677,
    0x8ac634279d37ec22, 0x11e009c7bb32428e, 0x3081abcde519922b, 0x2aced3e296483266, 0x8f72727322a27fd4, 0x953982f35cb9b688, 0xcb82cac03b13c06a, 0x0000042257adba56,
    0x2558d03dcd08a241, 0xc5ff8db676901647, 0xb70ec13a7298b59c, 0x3720bcdf8919c115, 0xb89f0ab1ffa0d860, 0x19ef24140dce37e8, 0x4a770587eedb6fef, 0x643530792d5c888c,
    0x635520660f5c524b, 0xd1bb232a7d6771d4, 0x000000000014a549, 0x8affdf05439a96f7, 0x22066ca1acd1ea3e, 0xff4a0f80470da1b7, 0x09e00ec582d9f671, 0x79c3558d339d644f,
    0xe31a822338aa7e02, 0xc45885c990c69413, 0xde712e4cd3a09971, 0xe8630251c240838d, 0x003d709224784443, 0xd46638028ebefe4f, 0xfd39b1de1583ff01, 0xf706cc3e01ad06bf,
    0x018200eedddcf204, 0xd02c90cc5f35974f, 0x0a4d510af2f7400f, 0x01e72ba3292622cb, 0x545627ee29b953c7, 0x7edcfae6363a2fc8, 0xe892e4516ad3ca1f, 0x00000000000000bb,
    0x16a2278ebe4bf829, 0x13f71fd2bca1d7ce, 0x13b13ec424981522, 0xfc90ee82e49171a8, 0x0ab83057f38ca1cf, 0xc3ab52bd6df95de3, 0x56cbb597e7a825bb, 0xc25f61ecfb567cb3,
    0xf30bced6c6827e4e, 0xabbd93fedd979774, 0x000000000000130e, 0x8cbe87bca10c14e9, 0x3278301be173d18d, 0x7509b5965c5e5d23, 0x01725ce6a87e389c, 0xfcdc281b3c43b235,
    0x63f803b5b92cd801, 0x57a311b688269122, 0xc74fc45e6f177c62, 0x73a76d7ae92ea197, 0x8dd0d0193d34e4a2, 0x00000000002f59f8, 0xd4578f8b1adaec13, 0x52c4fccd96f870a9,
    0xa9ce8f994e7739d3, 0xb5b1903b254af9c6, 0x53b9ab5c27ceafd6, 0xd07dbf8a1be32413, 0x82deec929d53a7a3, 0xdccc701db788c03d, 0xca717ec32e54d33f, 0xf495a8fad4da1277,
    0x0000011429a84b24, 0x31556b4bf5ec283b, 0x49c734de4115002d, 0xb259ce4ff95aecc8, 0x63e7153d64deb815, 0xdab88dce4161bd53, 0x8484201669b8d719, 0x4438dd9de0706c3b,
    0x43203ca26c066fb3, 0xc609e4352db3a68a, 0xb35cea3aa52e1357, 0x1ddc6a148261ab9b, 0x0000000000000004, 0xc8f6726deb962c7f, 0x90f7c1d6e50bf9fc, 0x911276b8688d3044,
    0xdf72cb9398c7a082, 0x7192f9db2cf0a6cb, 0x93450018efa5557d, 0x71f4f05b4bb291d8, 0x3ac05f4f9216f585, 0x858979a501fbd4d6, 0x71ece31ed275afa2, 0x0001c4593a878336,
    0xe79650c8587a5149, 0xb18e44de74979fda, 0x632e8c3372d034fb, 0x1dbcfb18cd54f832, 0xcfdf90bc92d49f6d, 0xa4ce9eb6c21dfa1a, 0x90fde09e4c993ec1, 0x1cc426f7b83f4ccf,
    0xf06e5b7be8a96bdf, 0x164bbc62a3fbfc3a, 0x9f2124c549104736, 0x00000000000002e9, 0x2fa931941a16c039, 0x6aedef17a1b86686, 0xe0ceedde8fa4c8a8, 0x23cc4ee1e9f44a7e,
    0x4beebff978709303, 0x13bdefa1ade4b3c6, 0x74b621026f66010d, 0x86ee8ebee828e3fc, 0xbc564a1aa88784a6, 0xfea50f8e9f3a98f7, 0x075e0f03567164c9, 0x000000003eb24eb8,
    0x70b5ab76220044ef, 0xbb00314100411e63, 0x827a013df1803754, 0xb65ffa77992c9800, 0xf1d568edc6802120, 0x09287cae2bbbe5f0, 0x960333e6c6106646, 0x9eb1a318d308592c,
    0x43861facb9f63b00, 0x9decdcf84b1c0292, 0x26c68b0752877b46, 0x0000000160f62273, 0x693d6304b2bff8af, 0xe33c241ee250ff40, 0xff52965b1341f4fb, 0x4828e554b7821a44,
    0xed1b259e7b4c6612, 0x95b504043c151e33, 0x840d5e9e9a3d1601, 0x3aa282a322586622, 0xef7a9f914b900b4a, 0xa234231339517702, 0xfbc1da307f3fca5a, 0x0000000001980675,
    0x9cebbff748114d85, 0x853bbaf5789448f0, 0x875f10591212af78, 0x86121c8bc0d36876, 0x22a2d8c8b4909ead, 0x6a6ee1cb60c049d3, 0x2abd4958abc7e6a4, 0xd897393be8d250b1,
    0x0328852e5cd4b602, 0xe3b5efded7c502d0, 0x20213419c12bf253, 0x0004ab97009f0f39, 0x54eb2330b5ccf487, 0xdc93708c78801bf0, 0xd4bb311b1e52c0ee, 0x1f42afb030c9a813,
    0x1a8cb623635aa390, 0x91edc845f4149524, 0xc1bc869665d6c339, 0x9b7798bcc5fd9aa9, 0x7e5c9b3f3f2b0d2c, 0x7506982be918d6a8, 0xc8a4c90d8730eaf6, 0x00001b4a1a0eff60,
    0xfd79de5ddff9d055, 0xb9f7398dee2348e6, 0xc10e75b2f7d0a400, 0x3f5734e5bd9a726f, 0x3100eea518a83fc8, 0xa013803eff68e5a9, 0xbf4f3aca55405219, 0xf238557066c1f827,
    0x997da7f38918bcd0, 0x0a9e1c456753480d, 0x05b4fd84baab1308, 0xfde59db963a38438, 0x0000000000000007, 0x6a22a9c3fb43bd2b, 0xb5dc6188ec068af6, 0xc596c85e95b2fc43,
    0xcd6a966e8333a77a, 0x3fe9b3c57e9dad4e, 0x3e82b32576e4ccc6, 0x208e3eb171b97906, 0x31902716588801a3, 0x14c61cbb7f062d41, 0xa35dee6814a739a3, 0x106f2c038ef8f744,
    0xe4f6ab1aff86b106, 0x00000000b4c1f37e, 0x6ea0358df90e0ff3, 0xbeaaef6bb69ce29e, 0x8091e4a75602ff02, 0xba1895b4e701bb99, 0x9b4d709fec84c937, 0x34129241cd9b5f77,
    0xbc0e7a6518fa6475, 0x051847fa4b2e50db, 0x71eeafd00a6e2a75, 0xf5bab1eaf8c379a8, 0xcbefc585806a3b98, 0x7eec898dd12cb709, 0x0000000000123e1c, 0xfb9c56f4e5fa87b7,
    0x9fcc48371c9841a9, 0x328a85699b6c2b04, 0x6a07cd53b113c08d, 0xc89b3c9897791c82, 0x5a2af148e1364d64, 0x948b2ae4c7836002, 0x8fca64a4cda89aa0, 0xc17c932feb7414d6,
    0x7356ca5c074083aa, 0x96358dff5b7bb7b0, 0x7aae66848a50ada6, 0x0000000000275ec2, 0x854c2648c7ceb9e9, 0xc0092afd589c69d6, 0x677354fc0099c707, 0x4401aba4ada52505,
    0x0bdb456cdf00a291, 0xf14b6e4c1b8f450b, 0x25f69571bda8fb75, 0xf22667b58c0faba5, 0x7abf50a665509ee8, 0x0f22e499af9c651a, 0x4dbd26bdaafcff66, 0x262df48993312abc,
    0x6b348800b2f8773b, 0xe39677f329d4ff0f, 0xf899d0ed2dec2e21, 0x41dd49cc180162ce, 0x475ff7385530490e, 0x1163f83f5cf9fc40, 0xacbf951c4a015f78, 0x3ad0e3f25b08e11c,
    0x9eb88ae95b5c74e4, 0x7f8b54d31710f851, 0x05cf3b942d209b7d, 0xb670ed49cb834c1b, 0xdbc31f1394434ba6, 0x0000034eca757c4f, 0x97e294259a828785, 0x522a7652a367c32b,
    0x515428e22603e906, 0xb7851b74cccb9a2e, 0x52218d6632cb07f6, 0x3780082f6a001180, 0x28c937334cf99df9, 0x82e6d70654ba05eb, 0xca625021d090f49a, 0xb5bf4a86ecc5a7b9,
    0x44e826980c4db065, 0xc1f4f508b2e27f55, 0x4debbec833aeb860, 0xd43bf319ed49b48f, 0x2f49afc04c08b21d, 0xd07419e60527b2ed, 0x2a27112843d9ca51, 0xc11c67bcc97d3bb5,
    0x293937fe34c2a89a, 0xd153a5762a695e82, 0xf3d9f05025d14b4a, 0xaf179b84932d1841, 0x741494a1f6522871, 0x30aa9b50c100c871, 0xf291b74001431329, 0xc78d195acfda58f7,
    0x00000000000001d2, 0xe1777785e08f588d, 0x3bb7e40c31874fe6, 0x7a96c38cb9bb0082, 0x1cc6274d1d3bdbac, 0x4a84765340562bea, 0xba6d4882dbf5fe4d, 0x1721a6ddd7ba92be,
    0xfb8d34926dda7160, 0x3ff07b6d94b5372d, 0x04d0286da9823ba2, 0x8bb57915db485646, 0x4472ca544866f746, 0xbfc67bf39935c542, 0x0000000006481dc4, 0x8778f587143fc2dd,
    0x5a8babd4568eac28, 0x098c6df454cd55ca, 0x0f8c3485c52021f6, 0x384f12eaa9f0f3c3, 0xa0a2e07c3e4f07cf, 0x7f821038789e7b1d, 0x2966431d2409349b, 0x5b13984c03397314,
    0xda6275f97d83ccf9, 0x9d36ee8410f73488, 0x2f15fb1b0c9f7759, 0x357bb8a6af73f81b, 0x00000000069806af, 0x3975993ecb40686f, 0x7f69873c2809eafe, 0xa8cc84f9b32b919d,
    0x5c6cc7b9488798a7, 0xf679fad8d8ccdb54, 0x10282f38831d5aba, 0xe1c828408627e34f, 0xd3882e2b7a6f3855, 0x142169843451d323, 0x62b43d06c9b158fa, 0xb149ea2066dcf261,
    0x81d5585645b3b942, 0x2643acdcaba8bf5b, 0x00003c8ba04140dc, 0x8895f4d769c97a73, 0xfa667e264be06fb7, 0x222d02947e970c11, 0x909180b4ffbee885, 0xd4bea803b74e7766,
    0xc0c90b50945cbf9b, 0xb2d0f83de3134c33, 0xc184cbd24fad7040, 0xaa77495c1a74985f, 0xfacc7c7e339ecf22, 0x108818a570d30f1d, 0x8a95a45b841064e3, 0xade29d9d7af7c5d0,
    0x000190ccfc5ca227, 0xc4b00a940ef84773, 0xb133f4714d11b1c0, 0x7fcec182c4d3458d, 0x5438ccd80ce0c8c0, 0xadc2e4f86512ae4d, 0xc92cb245bc4b66cd, 0x4719487b89224550,
    0xb5c7f9d9a39ed3f1, 0xdc0363975c90b3a4, 0xeff9085555a2aed3, 0x88fba1806d8e4dcc, 0x06109422648ef49f, 0x960a917600177790, 0x4fc38fbf77a2adad, 0x0000000000000004,
    0x4baa93e5b7c7fac5, 0x5fddd1239ee1c856, 0x793ce83de47246a1, 0xce472904cd268b6b, 0x61a89bd45333f83e, 0x88552d2b10e2b28b, 0xa673ca5c27284b18, 0x9f849012b57fb374,
    0xe3f26c6c87ca60d0, 0x4ae120c02f9f4591, 0xb2f8046e7d7abf01, 0x4ea9ac785b7567ab, 0x049b2f4b6b90ccb1, 0x39c32da31c69e555, 0x000000000000038e, 0x1f0011ac91f43a49,
    0x99228e6aee9407e2, 0x5c349eb8762af838, 0x8d452616b040acb7, 0x71526c300c4fca31, 0x56dd8ae71f8b9d5c, 0x169e3942f472ae63, 0xf46c54ba0ae8fced, 0x92af3f4e6574b915,
    0xac94efd16e8e8af6, 0xc19e6e952841c254, 0x6a6d0f5f3d8d19de, 0x1fbd080392d5e625, 0x7ff50223afe256a5, 0x0000000000000260, 0x16b97942ff30d549, 0xc976bde5706f48e1,
    0x1ddc2de250f9165e, 0x9dfed030c8f21639, 0x5cb3c67cd2edfade, 0x7b4fdaf6eb266208, 0x8958f6f21a9422ce, 0x8dfff3f1d0b8852b, 0x015fa80f68c9b018, 0xd7d716686e400e7d,
    0xdb838a356f9b4bc6, 0xf55592c0007b1793, 0xf0360276346cffd5, 0xc7bf0b6b79cf9dc4, 0x00000000027a1fab, 0x0660e532a455adc3, 0xf418da03a08812d8, 0xeec354855a00c0b6,
    0xd8f1677a6149e066, 0x78789cf224252232, 0xcf2e6c9d8bbcccfc, 0x91089f35f862402d, 0xaca91849403e6b68, 0x8d2f5f892e7bd565, 0x6adc551123059dbe, 0x2036367fa779c4bf,
    0xb06b187b8ae7f9e4, 0x6d1af4f4325321e2, 0xbbf6e078d87c9174, 0xc60d9aca2e141f6c, 0x0000000000000015, 0x34c51c931351fb49, 0x57e7b845c2a2f50a, 0x78ee823e7b4bb64e,
    0xd6440e886297a924, 0xc9535f5033963cd6, 0xf2009920eef6823d, 0xce45fa2f242032d2, 0xee1463f21b9d56d2, 0xf9c7be1f1a2bf541, 0x9229cf068f7fbed9, 0x51bc67ca0cc768f9,
    0xda566143827269ef, 0x495edf9f6e3f59c4, 0x690a57f1a426b3e7, 0x000007ceb164389d, 0x9783c2a20983ced9, 0x38e1e50013006772, 0xefc8ecacbb2989c6, 0x24b0804cdb08e693,
    0x87e09be0798db61a, 0xc50f7d56e9f566e8, 0x090fb0ec64b15025, 0x749e5be23fb2a75c, 0x4bf694131242c929, 0x098741e78fd3ba8c, 0x8c621777c4b8000d, 0xc78298870589f2ed,
    0xeea650e016cc40df, 0x6b22f777a346069c, 0x0009f51640101aab, 0x8506311354ad8613, 0xf524535ca79e84c4, 0x0625572fdf9ab7c2, 0x02c8b9091c2a72f3, 0x4fafe305d8ac3b82,
    0xa7df10ebd12c29e0, 0x46b8011730b310de, 0x1069682d15745e51, 0x93bd79253e91c301, 0xfe19e31837bba97b, 0x6346e600e3c4db9d, 0x8283e9915f8924f1, 0x890d82d240f49f63,
    0xb345ce8d62aff16d, 0xf40d093ef0ad69e4, 0x000000000000001a, 0x1ce9dbec85179061, 0xd50dfa76d21e7d5f, 0xc5f07a5946f29145, 0xa1bb77a6f37297e9, 0x1a0963319d04885c,
    0x72ae20cf87561a8c, 0x37b7b9d8bba85d06, 0x3e1d131489f6116f, 0x1223366b8b26c94f, 0xda179abd82026d8b, 0x739cdf40a7a6c084, 0x08fd5f04de6e59f2, 0xb0a4199f7d3a6fc7,
    0x82edd573f121cd8a, 0xe9363017d6f930dd, 0x0000000000000167, 0x7bef75b75cbdd387, 0x4bd3d6ba95f15887, 0xbab4859d0670924a, 0x5a966136e920974a, 0x1e7f892c99811850,
    0x6c6bc4f6f9e4a84b, 0x113dc1945f93ed7b, 0x352f6768eddf7d11, 0x8c381c76f48503ef, 0xcd98df3b12b3704f, 0x5cf7e226ae005ede, 0x7d73e943fed0dcc2, 0x114f8a0b8b095000,
    0xefb58f83a6e1e2d6, 0x2353da6dbb290ad7, 0x0000000012adcc30, 0x9f2002afc9435a0d, 0x23463ba07a2aa282, 0x0f79dcda0d1baa3e, 0xb39fd9875bcd6c74, 0x2591ed937c394e14,
    0x2e89b9cc4bd317f8, 0x226511aad783453d, 0xc244fe06753da169, 0x7f6b2652f23c6261, 0x7dc1b14641713bc2, 0x0a8d81fe7fb15553, 0xb4fffcb49abaef7a, 0x0cd8c816f2745027,
    0x7cf59503e079625e, 0x49c1347616b37414, 0x7fd7c3c4a17ca9df, 0x642d04a88703cda7, 0x83f99bffcea3788f, 0x94d6f8a5744c7c1c, 0x8c94f9c6d251f1eb, 0xfebe989a1fdf599b,
    0x09e9c30b5f5c4189, 0x736eeb74b4adebb8, 0xbf566421f1a5a49e, 0x928e7c8f43455266, 0x4f1d3ed564e621c2, 0x2137cc864efcc711, 0xb8d63725ce6a5f08, 0x9c18b18ec06d4d48,
    0x9d3ebc6c4794cac7, 0x6e0cae4ff66c7f07, 0x00000044ebdeadb3, 0x99f2dda713623201, 0xb0ac8209899edc29, 0xa30acd93c0a0aa95, 0x0e94ced953b0f347, 0xe1e0fc8258a9a344,
    0x422b07461c425049, 0xde9a56bd15a4f0e3, 0x66618cade11ffc04, 0xa65a5b38f21dbb2e, 0x0aef8295c9fb6bd2, 0x986f13ad56774be2, 0x678bd41df83e4261, 0x03ceab3e427fd26e,
    0x648d2a397645a663, 0x243366393fbf1dec, 0x9463ff8235dbe6dc, 0x5f80a913abcf49f9, 0x0eb4aa546b35ee39, 0x6e979005377a306c, 0x5586cc013fb3cce9, 0x5e2c7b53dc5a85eb,
    0xcf916ee1d8634c23, 0x91b7e86258f95410, 0x03ad2bcd91a95da5, 0x3bfd6a641841b6d3, 0x5871698325639521, 0x3e17c7d6d176eefa, 0xccc446b9055aa672, 0xb19fccbd079b6a23,
    0x36cbfa41ea8051f8, 0x65e19eee661c5147, 0x4fdcec6dca5a8bf0, 0x7fec51b0e57531ad, 0xbab2a0d2730294c8, 0x32a7b5d5b6d6ef07, 0xa458a5f5093e0718, 0xfeaadef99ec8d31e,
    0xfdec09ffe3bbc0b8, 0xc7b915b90957cc6b, 0x6c981cd3d3a4b419, 0xb4026c4352047643, 0x3cce1c3f5553b07a, 0xe3ecaa52a025379f, 0x15ee351f9ce05ff2, 0xa6f181decea014ee,
    0xc14f6fd663a124a7, 0x809be1186d237c12, 0x6f6a5ba2b3e8c915, 0x0000000001baf22f, 0xc420ab29044380e1, 0x3b5440894ccad1cb, 0x536f17628773489f, 0x2928195ef4cd4e91,
    0x1f1e5befd5b812cf, 0xc995e4ca5b21da3b, 0x6be983c1ce4fe204, 0x256ab0f7088c8c97, 0xca3167d4ee08bc1a, 0x32e64c158cf7ab09, 0xe069834a8dd037f7, 0x2abf5b78f2754007,
    0xc3f544b1b5b911cb, 0x3a4dc70e31aef854, 0x98760e2b3c533a9e, 0x8a3184aaa34e8921, 0x0000000002106b5f, 0x67cedac0c8fde6af, 0x7782bc777e49537a, 0xf0b930486aa4c56b,
    0x45c03e7bc13e926e, 0xf9388024bfc0f60a, 0x516ab8d47dd0b695, 0xf22fa8e6a421d088, 0x5070917dd70de078, 0x96f81f7ca029b799, 0xbb6961cdb66d9818, 0xb562e06885a88130,
    0x2df1028d44ff1753, 0x9ce85eed43239441, 0xb667fc559bee1a3f, 0xdc7fecca39c0b730, 0x43d053ceeb665bcc, 0x00335761a58abec1, 0xb0f97a23672b822f, 0xba20daa0dfba86a0,
    0xa1cbed107cd5cdc8, 0xc4463e892c2a934b, 0x01e30766ab0c88da, 0xc0a714b8fe94a954, 0x3fec6cf725ce837b, 0xd08980cb6294db9d, 0xeb879a46dbe8a6d6, 0x712e0d66230f5ff8,
    0xcd94914655f292e7, 0xdd1ca47c1854568d, 0x624fdd6795388c55, 0x4aa63b7dd89c96d4, 0x5a5cdebc6681f4b6, 0x748a39cd170e4583, 0x00000060463ee7e6, 0x78f6a13366740ff5,
    0xa7b0035ea0fc7001, 0xfa469db544c2c3ae, 0x4fbac8a2113e8297, 0xcbaf6e8b48828837, 0x0ae257e6e9d0246d, 0x628fc5f9451d98cf, 0x1dc51c706f059e97, 0xfbfd2e574e82e4cb,
    0xdcf44191aa66bb07, 0x3413639ab5465ba5, 0x5517c1373522df07, 0x344ff055d3044c23, 0xb59edc671109b71f, 0xec0640f5d9df4b8f, 0x39a1cf47940db52f, 0x0dfd4a38ab3df37c,
    0x808974c038ee52d1, 0x3597d155a55d4f7f, 0xc68ad23a74b31a9b, 0x1619973a535caad2, 0x0e67762017638a1b, 0x64ca593d1660f477, 0x192e7c1a0e9daf83, 0xf6c78d8357e926cf,
    0x6d51a70fa7235acf, 0x5b3e2725c2cea1af, 0xf89abbdc5a5c32a4, 0x25dbc72c705cbfda, 0xf57ccf684ec47fc9, 0x8aae7a6f839f2064, 0xe17fd2821d466361, 0x6486f680389be6f5,
    0xc7628f8317a363d1, 0x00000000000e04a1, 0x68aaf06ccaea51a9, 0x56585dcf06bc44cd, 0x4ea791b7fbf3d8a5, 0x2e4e81212d1aa3bc, 0x50ef4fc40a2a7f48, 0xd6235f7537e17899,
    0x5745b08fad7c70ae, 0x88a85e3b8c3a44c0, 0x54586eebc3a065bd, 0x95bd9384281de311, 0xbc9408bb5f24b52d, 0xe320225dc1d24064, 0x80bc2a80da49cdc7, 0x0071d6847cb39014,
    0x6e5ca5930f118e77, 0x8906a1c8005fb2e6, 0xa13b94334f4ed5a7, 0x000000000018cc81, 0xc62588521f45185f, 0x8bbc44ff2842085e, 0x2ec9583fd0c81aaa, 0xf060672b080e640f,
    0x03dd9808c70341f9, 0xdaa76baf858bff82, 0xd45eba5b38034070, 0xf318eb875d2df70d, 0x7e98b861a30ca009, 0x0484101b05fa7e15, 0x0df8cf45b914a51c, 0xc14f1236c27f859e,
    0x5fd87561c27754f9, 0x1a4d268df3ff33ec, 0x30abcd3c1fba9f7c, 0xb65467ccb31ad046, 0xffd2c73da193b612, 0x00000000000408f6, 0xbe11cc0abf22219b, 0x73081d61ae13ccaf,
    0x0512c205c07f5ebc, 0x96584e60f20eb377, 0x36cfdc19b7a42945, 0xb8dc1a0876893459, 0xcd1bf0a797b73e0f, 0x61bc9a099b9a8448, 0x44665bc098879680, 0xebbbd2618b5efcb2,
    0xa48bf935aee26e13, 0x00dfb5755a7e57a1, 0xabe0694ef99b4c63, 0xe946de94e391a34f, 0x45b0ff8f41041f71, 0x9a0d45a61b1d3370, 0xc4f96b3372b5dd9b, 0x05cf3520d0992a23,
    0x5c7b0e9309854937, 0x686f8dc1f313f572, 0x3eec2a9aeaf0da5d, 0xe9e454f6d8480b76, 0x1a3e04a9413b2e06, 0xc9566c459c1e09c5, 0x254d85be25266827, 0x0c1ea5e9158048e1,
    0xb9235adeb47fe1bb, 0x6d7295ea5e85e5f7, 0xba16c5a44514256f, 0xca9ecbee34e9de7a, 0x62119730c7e1c5e8, 0xf8a7e1f83681653b, 0x7c91ed98c110d7f2, 0x4d27543bee618615,
    0xbe56978b607ca5c7, 0x000000e6e4d86f91, 0xacdba52dbbbdc319, 0x7a34656bda707c47, 0x47e144dbdb79dc26, 0xc9a3d2c0db9051c1, 0x5f912a15e89ee628, 0x0b1b9afa73d1bbdd,
    0xa8b2967c8cf4e4ae, 0xf243391f02e874df, 0x6f389b59c0273927, 0x5731d4c1b30906b0, 0xeb7b909fad25d104, 0xc3063f4db961276a, 0xcf8f295a0126a05c, 0x1df6fe9c8749e7fd,
    0xc1c2440885b7c911, 0x880dcee72e69556b, 0x930dfe273df4832f, 0xf9fedbc6ad5b133e, 0x0000000000021e27, 0x7139c14ba3f1da93, 0x1cbe2e6612b097f8, 0xc0193573da460d80,
    0x252b85fcc15105be, 0x436c713ccf795888, 0x64dcca9fa1999119, 0xd644c188f8f8081d, 0xedf7aec9bd88d01a, 0xeb62203deb0fd1a9, 0xb7595826b54a9aac, 0xb369ca1930d39028,
    0xe08e5cf6ca20b6fc, 0xab6314521425b98d, 0xcabcf92cb3645b7a, 0x8e0067d8f390e67e, 0x50525c63ea14e4cc, 0xde786d0e140db3dc, 0xfebd7f0485c56ee6, 0x00000000000001a6,
    0x517c733ee2d017a9, 0x2574664dd315f947, 0xaa17ba28e72b50c7, 0x7ee498d85d8c1522, 0x5f04e4bcefb7545e, 0x5e5da330c4589c63, 0x2cf2d86a17522822, 0xb7373f03d14e6ae7,
    0xc50af45f9aeccab6, 0x20fc6619afb4be41, 0xb0b28a0b07e6b539, 0x2786045bc0ebf9bb, 0x8af88854bbbe6459, 0x05c5dc109271e3b9, 0xf541029d8760a794, 0x183b7dcb5792c587,
    0x57d44a562628384f, 0x87fe02956e98e1b5, 0x000000000000087d, 0x1baa3f46ad46b341, 0x1a6e5016be84c115, 0xb6d6377e2acc2435, 0x7500846d7f4a6b39, 0x24c37b40738d17e0,
    0x0c1a88049dda179c, 0xd9463b31c8275991, 0xe282f7d5f006210c, 0x7c9658d56f09ad96, 0x1d340f3faababd90, 0xc66616fe6a40bec9, 0x74b323ccd83dfc42, 0x1b9a4ab96092c103,
    0xa61f5b50ec7aefef, 0xb441fa9dd9a0db9d, 0x9538217f33a3a4aa, 0x637411b4bbd8ea69, 0xd3d0a5fd255253f8, 0x00000000013afd19, 0x679589094ecee56d, 0xe09f6c519254b134,
    0xae52cb40b82237da, 0xd71886e640f176df, 0x5992b0e292008bc7, 0x8376294122cc44c7, 0xf8e944dc39220d7e, 0xe0ea7945aa4446a8, 0xbbb0d08c5b77885c, 0x386acb8928b50fdc,
    0xa719eeb5930f4da7, 0x63e33ecc6507c7db, 0xac4053062a20436f, 0xb66b430021d001cb, 0x6158ca4714d1ca83, 0xd9be10fb16d39806, 0x255295bf5b77bcb7, 0xd225b4074e7a4733,
    0xec229818871073e8, 0x0000000000000003, 0x8305f9b524d8a637, 0xe5b5e34fd8311b94, 0x164858b882f444fb, 0xc2f6a17d5d94e8a0, 0x1cde2b7294a9b2ba, 0x7dca60f61bc58d57,
    0xfe85f07bfd2fa40c, 0x7cbca004e8a13e0b, 0x7887a8212fe260b6, 0x7f477c0e86892e67, 0xb47ea107a9279ea8, 0x44316511f69e2ec7, 0x1a9be376746ac2ad, 0xbc0e785cd6bc2f73,
    0x2b9ed156b3e90113, 0xc4b1f2e8501743c6, 0x4cc5cf1c121e83f4, 0x4258bbc40ad50a61, 0x000932bd04673a2b, 0x8c7ca7b22ac0e13d, 0xd80cd1e3137b8486, 0x1592025637ba8ff0,
    0x9b1d5fbff6d3868c, 0x3deb186373666114, 0x2d55d7b12453c80f, 0x484b28981123519e, 0xcf237d4e7d71db32, 0x9158caae8caa73c7, 0x1ea104b4598eab6d, 0x620aa7a46871e7f0,
    0xfe71dd724843f6ee, 0x5013c859fb5921ce, 0xdff7b1e11fad6750, 0x2b469b3b4b0087f0, 0x0767f8969901fcc1, 0xa386ba6941c41269, 0xde75314f61447ed8, 0xae92240b555ad0c2,
    0x8a9f3ab908386a8b, 0xa55b1243d0d1d05c, 0x33616f885139d70b, 0x8d1f8fde39040c36, 0x9a8301ffdfca2a53, 0x6b6b6b99f3e9ac59, 0x0dcc6176f5956b5e, 0x676087113fcc36aa,
    0x07049837b16f2ae3, 0x5f43716bffcbb43c, 0xeace584aae6cd97b, 0x3a857262e5ef9c08, 0xcdddcc38c5e4782f, 0xde1ad727d4d7a83b, 0x661d420cea841de1, 0x5c90662235099ce5,
    0x1314395413b49b1d, 0xd0b95e4055535a43, 0xb6e211657515c77b, 0x0000000000000131, 0x7a3edfc254cfc755, 0xe54a654ab8375e21, 0x77f2f8b00835a62c, 0x72f7a80491403fc5,
    0x624b7c818fce836e, 0x749b0be0fe304265, 0xf27300ef4c2a0ca2, 0x6b66b665805471c8, 0x898977e02fba7f52, 0xd003dd74113cf196, 0x993b859a4065d890, 0x2340f543154b239d,
    0xe257e557f77fddf4, 0x4ce65dbdd884033f, 0x12cac53006cb91a1, 0xd0fd590c6be15bd8, 0x78101bbe7c5675ea, 0x8021ef79b17c96d9, 0xbe1a336bf7e17523, 0x000000000019899e,
    0x2ed0c6048f90b6ef, 0x8a83b3815a2d507f, 0xe1880a4c558e96f5, 0x6a89f5b9a503cd37, 0x8d9bd84757d684c6, 0xedd3b6d895b1091d, 0x1976ce8d4bd6cbad, 0x2ad38bfbee8fe3ef,
    0x9ffd2a9b1fb0cea4, 0xd3132b5074767dd1, 0x3cd02f56b9d35567, 0x74e1c530f2169a62, 0x826e6ad05e901c24, 0x5155fcf51f48d81f, 0x809d2cb2de9e325b, 0x046aab1953165c4c,
    0x33f0022db07998eb, 0x3e063057733243f2, 0x2904c0152463bacc, 0x00000000004cd943, 0x039509da71f30949, 0x83722aca5cde502f, 0x16390215fbc1f01e, 0x5d18792cd02e02b9,
    0x19832bf1d991f623, 0x4c034ee89b04b750, 0x1d3892b2739af428, 0x05fd3ec1e1e0cf32, 0x68d518819fb179d0, 0x4cc7e04078379ef9, 0xd0cf97043add3c70, 0x83db66de9c86d66f,
    0x047a88a249aef8bc, 0x429e4e286f257f41, 0x7e8bf5562b6ff49c, 0x6c87c1b3594cd949, 0xed1f814b2c9f8628, 0x1eeb6d83266ec65a, 0x0cb912600f32a11b, 0x8a90dd61df01411d,
    0x0000000000000059, 0x7b37bef88230cec7, 0x8069f3dae37209e1, 0x18b6855b691f3826, 0xa9a69f33ecb1a6dd, 0x639db4b918a2ced9, 0x0cc94bb622d2b5f7, 0xe14ef6fc014e35eb,
    0x321adb871e50f1ae, 0x0016b9cea528437b, 0xee63e6ba90e21745, 0xe4819f7101f82f22, 0xb8c5037e41039b74, 0xaa27028ddb38a9be, 0x745899be78860939, 0x3d172bed109b5c2d,
    0xdfa8164792816de1, 0x46d8ae649d8966f2, 0xb3b0ae8cec256c00, 0x5d15b28dbf1926ac, 0x000017f6d5cada7d, 0x466e8f4783a3c661, 0x0a66a567d4b0236b, 0xdc59bd5a3fc6b062,
    0xc90a7bf25b3066aa, 0xda97c8dd48a68ab7, 0xaf33956fa192b5c6, 0x688c239e50681f51, 0xa279d3fe2acd13f7, 0x42aa048c560a336b, 0x79760993a23e7570, 0xef4f58e015504027,
    0xddbbb4d9c5e59190, 0x88a6a7d0dd3e0275, 0x177751bad3b70b92, 0x0f6f3c27719fad64, 0x86696ef34b72c687, 0x06b696400f7429e7, 0xfba77df2d625af60, 0x72b89a9afd959718,
    0x4885255824e32af0, 0x9227657bde038407, 0x9d6434a3e43a4e46, 0xbce0089587705126, 0xabd2bd8c1e23b49b, 0xa0c9ec95fd31b141, 0x142d3da58e7f2ef9, 0xac9fd7ca88a6198c,
    0x32673bd5a71d7564, 0x1bd7c06546cd4b2d, 0x71690abd23522433, 0x4664b749b5ae96e7, 0xd461ce2897636b65, 0xa1533a69c03d9103, 0xd17a860e91e33ea3, 0x2efcf89a10f4287d,
    0xf1667b22df8a7473, 0x19acbe994c49ac86, 0x46af9257c522fc10, 0xb601d408ee13236e, 0x9220881a0942d277, 0x0000000001f999fb, 0xda5c89f81898f0e3, 0x773a57e9b8c10241,
    0xce8e6bac1e24f674, 0xc8eb8a3ca507d049, 0x74ee3db259a7e186, 0xf60890b1f7be6b1c, 0xf92e0840b0132578, 0xf15a7fcc8366532e, 0x919db869d5517b44, 0x032386b38abb99e3,
    0x9936ed6c22efc1bf, 0x0626859c91a5a573, 0x173ff3c5ea326c8f, 0xf937c7e6e231e50d, 0xba92dbb59353dbb2, 0x75bb4992be263968, 0xa9fb4dbf2cf58db7, 0xa0d3f86b96d5c5ea,
    0xb9792efbf0cc3ef5, 0xeb8ff9a2a0fd906c, 0x0000000003c04c71, 0xe5ba036fbe0af9bb, 0xe07e9d1813c93be0, 0x56842ae2ef2597d5, 0xa1ccf00bb9d2886d, 0xcf1b0658866b1e27,
    0x1cf0f30b494789e6, 0xfc7609a011a548c3, 0xa33f043b6050cb99, 0x9c50d637209f3be8, 0x84d7bdd5ad2152bd, 0xa55e4757cb25557e, 0x8d235bb3f4ff898d, 0x9832b0e3ad681c25,
    0x9f6cc9fd6d5063e5, 0xbb3cc80a1b61eafd, 0x3f3e131d86ea96b2, 0x06b69ce477c0c405, 0x5f2d0d0e33a2190b, 0x110d9d856c6f2b48, 0x0e0fcba210483406, 0x00000024787f7d74,
    0x308d21601821078d, 0xc55467cba8b6fd96, 0xb9682124caf4e27a, 0x8ba7af13db1392ca, 0xa1f32e0f04373881, 0xd995289ae0508f43, 0x05edc4670f6fd790, 0xfb2955fc4b80a3c7,
    0x8a2e9df6d1fcdfb7, 0x1b579c1ef85bd1a3, 0x0725061e46d0913e, 0xcc091ecd74098dd6, 0x4da31437c2692d5b, 0xb9d7b4795dc7ccce, 0xe32a021af4532529, 0x9dfe9f71b705181c,
    0x4ffd9ef4a64b05ee, 0x0789eeeacdf8c6ba, 0x2737d9d60e6cbc35, 0xb65ad6ae660b332c, 0x248e2aa65d10b729, 0x000000000000023b, 0x0ab905f4b8512d4f, 0x9711d56f6c62a6bb,
    0xc9b7456e52cfff80, 0x10d8970d99e18ac4, 0xb3e7756b8ae08612, 0x4ac44a02ded50bb9, 0x23d4dfd363b25492, 0xaae05356f2ba1615, 0x004cf83ae577f023, 0x3cb2b7eee0e3be21,
    0xabf8e0036d87fe92, 0xb0145c98d3c9c8bd, 0x957b498bdb39d5e1, 0xe5dd2b1374580513, 0xc287b0a814d6a692, 0x8449226262b87119, 0xd91e245b2d33ce51, 0x3ef8f048d26462ba,
    0x4d42bc9fef035134, 0xdedcd11125a2f44d, 0x0000fecff72d0443, 0x8addcbcff0c5d985, 0xdef234826712780b, 0xad09c998c23c7816, 0x734343c82c6e213a, 0xe80e51b6b32ffbb6,
    0x97fade21095ebaec, 0x3917033caa472e3f, 0x098b3e92587be0c2, 0x0d3a6b6946c6578f, 0x651d5a8c58e8877c, 0x4d3db8334ddbabb6, 0xa035fac99a24d034, 0xbfe2db6805a8ff55,
    0x2bc33c2c9d2b08a1, 0x0458bb91b699ddf0, 0x126e83723e9ea289, 0x55c36f8747b14b90, 0x0b641640895ac02d, 0x4f313828c43491ca, 0x4c5346ce9dbfad55, 0xb27391aaadb88af7,
    0x000000000000003c, 0xac3508f779c2a51b, 0xf9cfaa1092fa63eb, 0x20f09bbf621685f2, 0x9e55dc7d4ffb7eca, 0xe3abde063a546106, 0x1413331fdfadc91b, 0x815b14d69bda3b15,
    0xd264129e8805cad8, 0x5b125b16ab1843e8, 0x87f73887b021e9b6, 0x3d951ba755eb170d, 0x61b66601e4db2ef3, 0x818b44691a5b220a, 0x425e8983d6f542a3, 0x42ab35be79b1fbf4,
    0x0762ec0335495531, 0x0284bb74fe1b4156, 0x8a2df6ca669c67bc, 0x7d4e57b59f22da62, 0xa52f0cbda8b0b1e5, 0xc4e18cb558c3dfaf, 0x0000000000011e17, 0x8538097fd2bc5a43,
    0xae5a62883bd89bea, 0x5748990216e19765, 0x52704ab626a8cbd2, 0x9ce77987999d4c74, 0xc6392fb39b4ef803, 0x77de6b796e7eae2f, 0x2491a55d2c699d43, 0x8c45d88fb6ea1abc,
    0xe6f6f462403c5654, 0xd0999d282466a505, 0x87da2ee7cca8e183, 0x10d23e86ae79bae5, 0xe32a2a6abdc81450, 0x35d738441445e231, 0x51431b3a99fcc965, 0x88ff9666a583272a,
    0x7d6d20553df8ce98, 0x11302195ada66a0b, 0x21fb4a53b7e01838, 0x003c2c276584a0d2, 0x0000000241b9c3c3, 0xf4f2d144a19dc851, 0x2be8fce969924770, 0x694c253c6d2e7ca7,
    0x5f519758a70e695a, 0x7b2687dd9b8f0a03, 0x8d67c8831a381e19, 0xa205e216ff5e1b9a, 0x6372b312a87c3054, 0xe3c9d1dce63b4db7, 0x4e2f3cf657cf9acd, 0xb21b31a9210d3dbc,
    0xa560d1a34a0c17b0, 0x82a769be7192c641, 0xfb2d8b186c532cd8, 0xd68658cd855d8144, 0xb221e5d6ac2dc68e, 0xe38b1682bfb17773, 0xa4d2c57e3b0f1951, 0xfba5523570a28527,
    0x7747a4b88049eba3, 0x2ba9c8c646ff0da9, 0x000000073e7e366e, 0xe3ab6f7616c37e8b, 0xe07e265027b276d8, 0x072f5c48dfd07dbf, 0xadf727105cd82a95, 0x04d78fec2f3a4c39,
    0x279580e9beb69439, 0x73b3f46539d461c8, 0xd9751f37f89a0d0b, 0x89f7abfa46bf73d9, 0x0db8878a2b114bab, 0x3b7c5a025587c46c, 0x19fe1c59d5b41726, 0xbea9e7d2731594aa,
    0xed5c533c29676bfa, 0x1d0b75cfe50babc6, 0x63b4c35f5c46aafb, 0xa61ef32c73c988f3, 0xade199873dd1b591, 0x4241bc3943fc298d, 0x2ce734f5b311d567, 0x91b5374cf169c5e6,
    0xa001125bd5bbbf9a, 0x000000000000021c, 0x0eda414da7a0de57, 0x09a87144199d1aba, 0xac6252206886ac61, 0xc060f829dbf583fb, 0x220a3b69d308f7b2, 0xa91f6d4b9cf36ce4,
    0xa26e2ead57d98133, 0xe463e81691242dfc, 0x9efeec2b75e23da8, 0xa250ad898a05b030, 0x4a4810134d0d806c, 0x37ed4ada0dcd5cc5, 0x44eb504910396821, 0xff9a68f420c714e5,
    0x687daa91a579a480, 0x9eaba840b77e6b70, 0x031bb949e9bf4290, 0xf09efd1961bb1dda, 0xf2c9f92ca45fe3d9, 0xa13459c2eb099d42, 0xafec4f5479263d92, 0x0010bb4799ef86de,
    0xd2b22531c5b57253, 0xe599e6f7f8dc8814, 0xb741806ef64a96f9, 0x2963a41e301e8efc, 0x3ffc313e6ccf75ad, 0x143a15f729f61bf0, 0x468fd4872f6ed246, 0xd5f79034ddc13b73,
    0x3e0b93bbd8b4445b, 0xd37dbddc60119991, 0x9a7b4e047a48b6a0, 0xd1619fd2e926beca, 0xa84836cea897243e, 0x526f9720533658a7, 0x2da6c06b59fd29ec, 0xad64f7cb1fd9d4c2,
    0x975fd864ccad0aae, 0xf07ff3242222d623, 0x08430b115910b54e, 0xa7a6ecc9dffd587f, 0x3a2fb47c32fabe17, 0xd9a4ee06940c026f, 0x000000000000011f, 0xec4caec688660fdb,
    0xa0dbd6dbb95cc967, 0x5c8a86123d98b709, 0x713cac2908e90e41, 0xd9b522b4f36a2b89, 0x82e44b2550b0d1a8, 0x0038abbc51574282, 0x7b1b2e7691cb42d0, 0xc35cd4621b44cadc,
    0x8347beda4e432d0d, 0x3acfd6149c73787d, 0x342e89f249f81583, 0x13ab307955227615, 0x6f6489f1a0c397c5, 0xfc0e92bec7025a1c, 0x7e668ed70b46fc30, 0x62c9a489805c01e8,
    0xd7c0da6a9ffa9fd7, 0x53396773dd7a9709, 0x4de7ccd23fb04ecb, 0x614e40978f7dd85b, 0xa4be9b36ae63452a, 0x0000021cbe7526c2, 0xecfbe319f17de0df, 0x26211d7a2c92cd4e,
    0x6738df0fe6722cc9, 0xaa56910d1cac9827, 0x65f53bfb3e3fab1b, 0xa8848c9eba12919c, 0x825a6003baa77377, 0x326220df684c5b6b, 0x0385004bde1e4f11, 0xf189fe0a34fa8046,
    0xa5368714579e5121, 0x79e67f1879940fa7, 0x7d895aea3fc7223e, 0xb848e80e2cc9a673, 0x8eb46164e4a2fcc2, 0x4174f28be3f45b4e, 0x052e5d7c89358657, 0xb0af095d893dff5e,
    0xf2bd8ce1b2232a52, 0x002e3ffe215121f6, 0x04187b7d6901ce41, 0xf73a04669ff68b11, 0x0000000108441daf, 0x3b69ff7c89695787, 0x525fd57a2b7502d2, 0x6db56896bb3b53af,
    0x4eb1f092db3c704b, 0xacd67126c822bbef, 0x858edc56bbbe43b1, 0x3883ec0318d90586, 0x16bdb1b118cc2fc1, 0xbeac680466c6b09f, 0xe42adde8ac2ba4e6, 0x851800d3e59d592b,
    0xa3839bb63e814715, 0x37c18d7b18be9ae9, 0x4c5fed60b8b949e6, 0x8f851905edb9f930, 0x0f5f312949c6b5de, 0xd760a7b445a17103, 0xd8f7117d1cb26ea4, 0x6c53a63129c7408c,
    0x9aba727d4f811cbb, 0x64cc12ac97afb02f, 0xd103668c40bdaee3, 0x000000037ba1edd9, 0xedeb9d686067d225, 0xe61a9ea0c8881a01, 0x9d4e6f8acbb8847b, 0x146e4b083216dfd4,
    0x87846fbc8e2b9387, 0xa76803cfb5a63058, 0x46906f8fb94136d9, 0xc3d46464ba50a378, 0xd528a4187c7b6cb2, 0x0e70b15803950e2b, 0xf994547c46c37472, 0xf9444d8163194063,
    0xea0a8187f5760969, 0xe8f0323ab1334b22, 0x5d19438474542f60, 0x5e7917b1e98e0bdf, 0x902ed9a0bb85df18, 0x5c5d094e7ccec177, 0xb36629680d1debc0, 0xc59474095af6cefa,
    0xc39948ec574a25de, 0x83ff17e14451d453, 0x8885127a5c5c8aec, 0x00000000000cf575, 0x0a5534b73a5cf1df, 0xe48a50430c06a32a, 0xd9400dfb474fb8a8, 0x94daa94feeb1d70f,
    0x038bab3217221191, 0x234f8abfbf58d72d, 0x9ad2bcd6b0d0606b, 0x703dc15249693e50, 0x6f36e984e1a59576, 0x20b12906aa01e92c, 0x2dbb1af7d0ce0b19, 0x1108d5c97dcb265a,
    0x29b00154fc1ca3ae, 0x1e17dacfce02cfca, 0xcfac53495133b525, 0xc4182021c4d25fc8, 0xcfebfdb08bd39d96, 0x90552a16ee779f30, 0x76c343860c7889ca, 0x3de879670e70adbd,
    0xb23e115929e1e3da, 0x1906a0efa07b6b31, 0x01b53271ebb2d32a, 0xea099e946ac3c993, 0x4b3770cf0e4c1ef5, 0xd192db0addba1522, 0x412732337ebf42b8, 0x2c6e9979795c20bd,
    0x230ff67b4a4eb28b, 0x0be9c33177525089, 0x78e32a76c41522fa, 0x39a7e6d00cb9752a, 0x804ab9a125e41399, 0x1f8f7ef667cdfbcd, 0x5abf73590fb91ea0, 0x8046194be4a7b151,
    0x673ba99f6c6d96d5, 0x7dd85797c1748e8a, 0xb103a35b97fe3f54, 0x61ffe9bbbf7d89aa, 0x44f924faf3d621c6, 0x24e0c3c23005cff6, 0x9f41864b511751aa, 0x82f29dc1d6fe5141,
    0x12dd10bce542adc3, 0x387066fff15fe778, 0x000000000000042f, 0x2338d07c685e1113, 0xd67e6447811347fe, 0x2300f7090c2d1bde, 0xf2f7cd4eb0f78b20, 0x6414186cce7e3993,
    0x3bb3b4f95107c3c0, 0x7f6ed9a943932bd7, 0x4d2ec46839489252, 0x5a60c20da7fba432, 0x136591cd03d7ecb4, 0x1668e7e84baed2d1, 0x03a8c91f50517a93, 0x58078e409aeaba07,
    0x9f23ac56e14feeab, 0x9728428003595b5f, 0xa919e6fa98c6af79, 0xa04d9ee3a7217702, 0xb2c9a1191516fc0d, 0x8987c9b934e7d749, 0x7e27104dd5c68c3d, 0x7fb776bd3455de5a,
    0xbc6714f7073a4295, 0x9e620efad3e50bc4, 0x000000000074c38f, 0x065f7c06d708894d, 0x1c877a0cc04eedfc, 0xa0c47ddd3698b784, 0xf578c4300c94e9fe, 0xe2b40d9726d8a416,
    0x8052f2d201ec44b7, 0xfb6d874feb63464d, 0x06339d53ad922910, 0xa734778b7c585fa1, 0xafc8c30f0c49d27b, 0x124cb3f6dc3dfeec, 0x97255b6b2acf1ac4, 0x8eb963146eb087ef,
    0x721a41a1b7ef374c, 0x6c67adfd265bc891, 0x2c52d52539785ef0, 0x7a741cf4fb87aef2, 0x383e5dfab7b9aa10, 0x903345a1b7126c89, 0xe78719ed852435d6, 0x49cd4f2b98cfe858,
    0xca4d706862b86ca3, 0x1f07b97f79b6b333, 0x00000022a1f6c068, 0x75509b56ffffba55, 0x22e91e5d1f6e1b99, 0x7424cff8132d7471, 0x5e0b5125d704a4c9, 0xda015410b1627c88,
    0x316983001674cf21, 0xa2b32d2d6d95f341, 0xb9af15020208ca68, 0x88f2c095c0cc0002, 0x417e7aaecd4378db, 0x1b7e257e8262fda5, 0x986db981bb4a1f69, 0x9cff13973b0ae177,
    0x48231d6fa7aaf6b8, 0xe4d60a0d5b42427b, 0x739eb1ac2dad3d8f, 0x407764acf1ec882e, 0x8d9eff650bf3eeec, 0xfc3093d4e41e527e, 0x7070640b29ff6dec, 0xe609dcaced84179b,
    0x4c01ebfd0c72e852, 0xf7363f78aee4daff, 0x0000a418459c98cc, 0x1a9adf9c3d7ab5bd, 0x95103a708d0382dd, 0x3b6950b9b8187352, 0x8fcd7e362b20f95e, 0x42a8d6b30e919fdf,
    0xaf507805dc85d6b0, 0xabe615df83cf84e6, 0x7e8b16cf41164f3a, 0x47e012a4f52a4dbf, 0xc173809795e2d8af, 0x8842a0e6d1fd91bb, 0xb2d5713c60ec99c7, 0x7dd5d73c7d776c4b,
    0x62b6f8aaa0b3d31e, 0x7959bb63e40dfb9a, 0x89de86604de57aab, 0xd4bdd59c413c901e, 0x0298c9229c0fce9d, 0x5eecf9ed497f4e34, 0x5fd6baab896733a5, 0xb2284f585cde65b0,
    0xcb915bcfdae25191, 0xb0ea536f1c87ca59, 0xc303b441ed51e8da, 0x0000000000000327, 0x0b9f6bdf100f4bbb, 0x288515672357e0f4, 0xfb15eaa9cf879bdf, 0x1a582ae8950fb899,
    0x7f0d708fdc704f3f, 0x3233ae7844f4aed5, 0x5a566ae2e99964c4, 0x2d951c5cad6572b8, 0x153e2d915ebfd052, 0x5f5330c703667c4b, 0x2cfb81f483669dd4, 0x0eecbad4d0cbce8c,
    0x66288fdc7f7c1afb, 0xfbe2d353ff6be949, 0x3a16a10a5014bdf2, 0x0a3b7a90a972e1d7, 0x49020d2ba9f23b6e, 0x6d2cc205bca68834, 0xe1ceb7fd583671dc, 0xb370fba03c95149c,
    0x148b54ba49410b49, 0xcd2a904780d0a1d6, 0xf977d6f02c8aac4d, 0x57d8d4a7b30a12d2, 0x00000000000000d0, 0x74b088b10a834adf, 0xb7b7a4bc4574718a, 0x58de687290d46e1d,
    0x980dede6e6c9f31b, 0x142a8e707977e6aa, 0xa529e9abf989a393, 0x8dd6967c2367cfad, 0x0d0208aac9272e0d, 0x3c473240ba25f719, 0x6e8794c0589fcd60, 0xbccd7641d0fdbaaf,
    0x847cdcf515b6edf7, 0x167ac6348e3828ce, 0xa9989252acd312bd, 0x750346141ec56967, 0x97063e14d99ad799, 0xfbfd4fe3c4f2d8c7, 0x747665e0e186b4ca, 0x42f17dd657554a91,
    0xc692424e0eaa1e01, 0xca92cfee219ffe92, 0x418b3fea4cec8296, 0xa7e0e80511dc0e03, 0xb2a1c655a26e9b8f, 0x0000000bf065ba6a, 0x530781470d7db5b9, 0xa33c6feb5bc9e68c,
    0xc73573f42c5409db, 0x8f5239ab2715f0ac, 0x125e2ed277ecfd63, 0x14b82f9379040d07, 0x6178f2b5f36e5869, 0x60d97c27168da591, 0xf301e77b4d398abc, 0x81fc34d835d37feb,
    0x13067e1e6cc896ab, 0x8d0919ae9bb32ecc, 0x64a84cbaf3b08bac, 0x8b3d1b0021af4202, 0xed7601ec7d208a37, 0xc83d3591c1d35445, 0xfa761f299fafaf6f, 0x30d217707d911edb,
    0x0760ab2de8fd1155, 0xca8416ce7ce4ff15, 0xae1041ad05688faa, 0xac0dfa82816b8974, 0xe1e2cdab6e074949, 0xb00dc8ef0c3c90bb, 0x00000000011a436e, 0x402a57ce9d04155b,
    0x237131be337ecde0, 0x706170ba040180f1, 0x27f077cfd3ea8aa9, 0xc2958b78114bac0b, 0xc3b27cd1344593aa, 0xd8f8657b3db92044, 0x757d90ec0c6dee6e, 0x1a49eb87f2db40de,
    0xf26c7e9e2fc81287, 0x8713e8620ed1e97e, 0xdff1013b4151c203, 0x9e988e8e9935d3e0, 0x3b6aeb32a1bbb47e, 0x19d9b9198a0ee2d2, 0x143b4fdb84b56df6, 0x93dda59d12685c96,
    0x7b4d2f1ed2e58ea9, 0x8e421e7512c3e7ee, 0x74c4c4c4e3902ddf, 0xa0b19a6bb9945649, 0x6fe1b65e416cfd21, 0x84ce9c971acad344, 0x54097f8c62dcbc47, 0x000006e2dc9ce4a6,
    0xcb4570cee2ee9941, 0x6539d98da88eece2, 0x3ec34bdcac47f0c8, 0xf3ae2b22fbfad5c3, 0x12499c0cb43ab744, 0xe5f931a00fef11c4, 0x4e381f3a0d93a96f, 0xbda8ba259fcdf886,
    0x5066aa4866ef66fc, 0xa4f2eee3995403ea, 0x4359f03037eb60bf, 0x70024e0079561ffc, 0xe18273ef89739171, 0x75519cbab0f6e5f5, 0x812c20becd22f643, 0xc0b644facf13cc19,
    0x212fdb21ec13cbcd, 0x972233154a1431f1, 0xa0a44c3d0ee009f0, 0x99f2e23ad10c852a, 0xff01723f0f49564e, 0xe7f74e8daf87ebc6, 0xd6a2980a270bd0a0, 0xa0d2000e9c57bd8e,
    0x0022ee22837e8a70, 0xdef3f53b366fe799, 0xd88bb9dd1f7ec981, 0xfb0122f246c9bc00, 0x760d1a4f2b597834, 0x22803e011931c4e5, 0x8192350f20c538e0, 0x65a77c966f26e5c0,
    0x1c19169d8b48122c, 0x85c9cc64635bd882, 0x356d49b13b144bf0, 0xb3e181e17c99be6a, 0x05be17720917bda7, 0xdb7c9ce704eaecad, 0x332451eb40276fc2, 0xc51d981094d76e97,
    0x25b44de3cb3c12ba, 0x944784b3fcdee6a1, 0x8ffb984d3cc713ce, 0xfe6bb6bf72dc9a53, 0xbd9cd318ab7bc630, 0x510756dbd9d36035, 0x2261461bd3ff02fe, 0x8349b68920773862,
    0x7d6af9e769bcd862, 0x739249d68a326f75, 0x00000feee01f9c7a, 0xe2cc8d5fb41a006f, 0x29d975421c4f96d1, 0xb48f3f4cb6428a4e, 0x66adf1088d99fe4c, 0xbda2072a97ea7961,
    0x23c12b592ebe6a3d, 0x6ae76f77bc508d3d, 0x7f9195eba21198ff, 0xe4abaa8530a74c31, 0x97b445c2ffa6f024, 0x213ca2ad026a9c8d, 0xbe58a6dca74f5806, 0x4976cb5b481dc55a,
    0x3e9dfde1a4fe50b1, 0xf6b50fd7a4036f7b, 0xef656135f6c6d4d5, 0x43e8c8cd4c06d210, 0x3ed31c89400e214d, 0xc2d94547b264a65d, 0x0611f98535b7912e, 0x5011546b1e4ff704,
    0xe42e2ff868662d73, 0x1daa1f03a11f4f46, 0x7250b23c432d3d22, 0x16b30332dd78f3b1, 0x0000000000000010, 0x87b55487b53c4949, 0xc2ab4411b9cb1d93, 0xc5fe740bc47b2d24,
    0x9262bfdd31d408f9, 0x2bf7b090282615dc, 0xffa8729842e948ef, 0xd40cbd197c868b8d, 0x9e7ce3e515389d90, 0x4ee78a74ed4f82ec, 0x0ee1ce1989436a7b, 0x50b89e81b4f1c37c,
    0xc96ae4c9688c4eb8, 0x3d39f46e26f99a5c, 0x922e02d33b50a7c4, 0x8c464068b9073f99, 0x7769e04de5af32e4, 0xffcb9e3249612073, 0x5511616d5c2f515b, 0x137ad5ef7f53449d,
    0x424373c1be986619, 0x82c3e9429b00e4a9, 0x07810fcb4ba940cc, 0xf87146f75b45a39d, 0xa7d0356697f21102, 0xa3fa530aab5d7b6a, 0x0000000018aa674b, 0x02100a2fe9bc487f,
    0x5a059b68049bc9c4, 0xff7839333b96c690, 0x831e66b2282463be, 0x7ba4291ea3e6d74c, 0x0ef941cba2ab0d43, 0xcccca8f501364621, 0x9da4ca0c91d958d2, 0x84f92035e8149ad4,
    0x642b9bc10fedea46, 0x3f3bc5c59a85bb03, 0x4cf5fe3a24d914e8, 0xca72904e00907efa, 0x7a7b354bb4378630, 0x087fef3fa73bd448, 0xb42967f697628767, 0xfc77c23d984b0ecc,
    0x37546e47deda1faf, 0xb900fa2f70cfee63, 0x044cb478a720d556, 0x8fb7bcb2bc721362, 0x70b7bfaf516bd8ad, 0x44987faed8bac1e5, 0x86ad9b4205cfac62, 0x5ff7bd0b61f0daa8,
    0x0000006cfd73cf58, 0x1a21dcbb8f95174f, 0x93d6262b020b3036, 0x42b3b212cacea2e0, 0x0c6892b4ee16a67a, 0xd0a10cdcde99c72d, 0x9df4962b1bfa6abd, 0x4fb74e8cb81f47b8,
    0xadd10bad787b58b5, 0xd13235044ab945f3, 0x2bd3d58705d23d8b, 0x69fe46bb1bffcdbf, 0x668208492d36d896, 0x5254013ea2651b46, 0x93e838234aa19453, 0x9415d27ce455d40e,
    0x6f9c50cc1cbde715, 0x81a25df06a65836f, 0xa3ffaadeef9d144d, 0x6447267b0ac21d8d, 0x1e08e0bdc4056d3e, 0xb952b56affdbf4ce, 0xd1c1748e2b6e6de1, 0xc4f8cb11d0d0fba3,
    0xa36b119d2613a3bf, 0x5cea36d31254cc2c, 0x0008d8eca3d24f53, 0x0da2f8a3c04760d5, 0x8c597dd9a8a20569, 0x6d65427107cb4ad1, 0x5b6f3d747531366f, 0x183811474da2ef9f,
    0x680562c1b8e563a3, 0xbb35e4e0e05bca1b, 0x092264788d456cc1, 0xce5800653a265cbe, 0xec6a0de40a7b1725, 0x1c2b72a1ff30b641, 0xb4f07d2bdb2df76e, 0x4538d1995cc90a87,
    0x24a0c71758837f12, 0x8d5952d2ef353c88, 0x5dd77867f78b7c74, 0xa360be83915809bb, 0xe0dde68e28d488b8, 0xadb17647b4fa57a7, 0x9d3d4a53f4ed967a, 0x4b4801117e5a0175,
    0x9e97824e8a62cf82, 0xcc0823fd6678a1c1, 0x3fd2e44d6d5a47d1, 0xb195056826e6eb3b, 0x00543f6887c28cd5, 0x77a46d41d26484ff, 0x34cb5e0b6d5366f6, 0x5703514101584348,
    0xe7d734727cd2f15a, 0x1452fa1d496ff9c4, 0xbdf64bfad47ec9d3, 0x64b5deb5f40dd381, 0x26ad7394c5c75e17, 0xa73d419352c78205, 0xd689593d4e503343, 0x1569991e565a2cfc,
    0x340ae18f8c8912d4, 0xc68d39e3e47952f1, 0x16274bc315f4f772, 0xe2c30d71311543eb, 0x310dee8ccf1bb2e4, 0x850eaee9ff18fd4a, 0x56df3d98a2f3693c, 0x516de9dfc5633fac,
    0xf0d751a8ae2dfe6b, 0xb8532abae4a74364, 0x8e600999783c87a6, 0x1fbda7b434c71eca, 0x90b8c3041945904b, 0x9229f136ddc2a788, 0xa0eb1e3fc12cdc10, 0x0000000000010ed8,
    0x56cff37d1d9df7b1, 0xd9d8bc746df63999, 0x256309094f489bc6, 0xe1791c5a0aa0b474, 0x0c8b7ddbadc80723, 0xa38f5dac90a88469, 0x0f00057c65f33354, 0x391a5c6b8e97abee,
    0x32014ab524f7c1c3, 0x70b18ddf61656eaf, 0xc23a748eb5addf4f, 0xced7dac091621d1f, 0xa2d0f281c0792780, 0x4db743289c7c2040, 0x8ad391dae21ad5af, 0xc4d41b9a51d06f47,
    0xbe80084e8d1129f2, 0x77d1126b9c0829c3, 0xcdbd4a09ea0617e3, 0x22d171c4816dfedd, 0x2fe403fd24d5be89, 0xd3ca7c6dbe65ff33, 0x246240d11a467dea, 0x495badd31ebb311d,
    0x4c6fc65cd3d68b03, 0x0c24b2c715b82397, 0x00000000000081b4, 0x4f6c66f4dabcb961, 0xbb397112714bd445, 0xad1a286f3734d5a9, 0x0b507c32dfd95a49, 0xa63860431a1c725b,
    0x7820fe7c68b54cb3, 0x79b25f6acb109131, 0x6137c22ed6b7fd3f, 0x882750264d492b35, 0x79f69d0a2a69844e, 0x4ad00c7225598641, 0xcf8ae3ae94222e67, 0xe620d2a89063b513,
    0x14bf4babd050632d, 0xeed7213bc04eeb73, 0xfd8f3bebda3cbff8, 0xbd8e7f2207620769, 0xaffb6cbdc4d6097b, 0xf4f3365945dc0b64, 0x8509581576680f77, 0xd27614027df8f2ab,
    0x79ccdc5802b779a5, 0xcf30d21a4b8b8bc6, 0x746e9faa3ac27e26, 0x241c949748a89ccf, 0x3e61ce4ee53fd80e, 0x000000000189615d, 0x62813cff09e30fbd, 0x272df1d5c2ddee86,
    0xae3415b6c08ebe07, 0x77255e2ecbca3d50, 0x3ddfe7ee13dc0c37, 0x531902d4cda9720e, 0x52e4755a665f2517, 0xaabbea28817e9d6d, 0x75743d44016e798a, 0x78f614edbb13bb3e,
    0x6131cddfdf81c905, 0x28495e432b1410fd, 0x6b14591924422e5b, 0x3348546e7c138e1e, 0x2f8d28c376c8eab8, 0x38f4722c51870fc3, 0x09a90ca240bf417e, 0x513eebf1feb5ed44,
    0x2bf204c879448751, 0x70d5c915c9ce2b6b, 0xfcdbb26c9eeb178a, 0xf3edfa930d47a800, 0x1369a6e29eff1295, 0xfd8339f9969a85b0, 0x2e2001cb36699d9b, 0x0b5783e9dbc81c72,
    0x471a011eda2d82ba, 0x7c2a05ee46c11fbd, 0x4fff4b8d151e55f4, 0x451c432290fe4009, 0x801278c22b2dd7a5, 0xb7b3eb8efb4e437d, 0xd21b9ddecf76aac4, 0x1d39f730581c2430,
    0x082adc316542bf53, 0x80e4e23a05efaf70, 0x497071e75e84aa03, 0xd9cc3b48864073b8, 0x43c4431e306c3ce2, 0xbbd8d95a3494d88e, 0x80b19349173f2a7d, 0x2b84b58e26725daa,
    0x24f2f3bf6ccebda4, 0xaaf06947fdcb2f14, 0xf53772b7df94ebf1, 0xe3cad45b64c848d3, 0x474ffd41816507a8, 0x77f614ffc024be72, 0x85a3dcf2ae6ca159, 0x2bae802c483f224c,
    0x205ec02fbf7b26d0, 0x8330a4b84ac27c58, 0xef35d40ea34d8a8d, 0x09e60cfff67e6fb0, 0xcbe9df8bc9d309d9, 0xb5e2ed24fe30c21b, 0xecdf44b6d7f291c2, 0x5e7c3c6873a47733,
    0x00c383ae3571c486, 0x7db4068b67af805a, 0x8b12fae1fe890375, 0x3f1d428361eddb7a, 0xc0ed0dd089068d4c, 0xf17cf4678b637de0, 0x8b607bf2f38e91fc, 0xe068b9b5b098d435,
    0xb9582c34a3215bd1, 0x60533a4280078b35, 0x28812b8b7f413896, 0xeb6db0a1864ed70b, 0x47563b417cc19ef8, 0x3b709ae1e7b728e4, 0xeea2efaa4adcb176, 0x998e7deb9fd5ab4e,
    0x37b38af14a20a2d1, 0x08dbef19497d5336, 0x2b1301e72c164801, 0xaa923e9f33fcae2e, 0x3c55f59b14c5c890, 0xd5a2566a8b71f542, 0x32798f5967403a3c, 0x0000000000000005,
    0xd6dc31492ccb8cbb, 0x0dbf4105dd9e1a8b, 0x5a491420ae27099c, 0xc02407cd2057cc0f, 0x5d67a24b049fe1f7, 0xa3ca3378fd939474, 0x69c78985e56fda46, 0x1662dec539ee8afb,
    0xa0b321887f9d963c, 0x65d662093306e445, 0x52fee9ba0616f3a2, 0x6b43e0a2b259d077, 0xeb7559800b00568f, 0x25c5672bc490e6ba, 0x40c15447bf41bf34, 0x5dcbab8983928234,
    0x32ed4e3f1ec16179, 0xd31e4bae09887e21, 0xc86dd7614d945bc8, 0x5207a9e7ba681bfe, 0xbad448a9d3848f1e, 0x7591e7f73a0466d4, 0x4f212522e3b0c44a, 0xc2c275eb3b96b01b,
    0xa1cc99c34cb2ff92, 0xc6931f5517f6ce8e, 0x8a7d014c0324f101, 0x00000001b4529265, 0x15cfacf6e33ed8ff, 0x38059c47cd892cfc, 0x6dbb1bce4e988336, 0x4b13dfa28c129355,
    0x7addfa89a878fe6d, 0x681c25cc543006e7, 0x3917f6612942a3ed, 0xa616dec793a7eaf2, 0x9cd54b6a92cd670b, 0x02d9dea08e26792e, 0xb37a3dff5889def0, 0x790d8f89619b6871,
    0x26fffde417e8e121, 0x56e80dac95b9293d, 0xce900e7aff919685, 0xf9346d3b3e0c4843, 0xf36e22b118f0ad08, 0x73b6320b02fe20ec, 0x0f2579c56813e6fe, 0x6ead4f9afa230fbc,
    0x46f6d22ac2832dd1, 0x1d942e5e4c618076, 0xee16b1b91520bd20, 0x2a398c50261b501b, 0x5efcd1f57c4e1030, 0x2f146fd8721b52c9, 0x9c2655dfa9b16e60, 0x000000000002e756,
    0x0ab195d02df60c5d, 0xe67a362c6d970325, 0x33d3bcf5e35a56e5, 0xbaa2504518647710, 0x5ae5a4a6563c9f30, 0x69b59e3a79436f0e, 0x167ddea847284d61, 0x4af3ebee068dc9c8,
    0xa2841954178dd6cc, 0x8862bc39ea04661e, 0x5b26d8d1ddffe529, 0x5cf1024e37666b41, 0x2a5660883174e47d, 0x1bfec913b18bd1dd, 0xefd933acd64117ba, 0x2c8d75497651e755,
    0x562e2ddf7b0d6922, 0x69d2461b652cca00, 0x05f2768acd014306, 0xdfa2f76652f14674, 0x0a965f2f84e97445, 0x61f78bc0860cdf68, 0x420c7bd271f0ed3f, 0xda95f9f28d7292b4,
    0x8a9c5c9925fc7eaf, 0x1e41b99813932942, 0xe8644ed7dcf4fbd2, 0x00000147c51df291, 0xea8d5f80401c8211, 0xf66ccf19ac376be9, 0x4e09c89eea50450e, 0x7d6b594933e316d6,
    0x4b4906675bba9f2f, 0xd1242d4a631f19f6, 0x32cea46aff5ea93d, 0xfceaa84decff44cd, 0x6d3e5767828b4ef2, 0x95f5665b44fa6194, 0xfdc77caf25bfc568, 0x26211dd102688604,
    0x73e2e426f4a57ced, 0xcd82026af0c2c2f3, 0x4ea11efd69e1551a, 0x6b4d6e83a7c88186, 0xc24f93688d502944, 0xb394dbf9fa2c8033, 0x84ca3e89004bf426, 0xa3e59ed7b8f015a3,
    0xc26de217f52333e3, 0xab1ee988994a3818, 0xb142226520c741e2, 0x0f2ba262b6ee32a5, 0xe538e34e034f6f13, 0x8661db810fd42e39, 0x740bb239c4695ecc, 0xb988046e063103a5,
    0x0000000000000003, 0x36a595691a2e18d1, 0x3e2d3b340372a1ec, 0xa201ca5a5bf8771a, 0x9555b882a2b05574, 0xaaebcac038dbe0b4, 0x6ad05c99cdc4e814, 0xe9369b188a9dc3e0,
    0xc47adbe1ec79cbd3, 0x0ba9586de159c890, 0x6f4fc038ec519a1f, 0x63901d00ff1ed085, 0x8f16df35143b384e, 0x515590c84c8db78a, 0x5da787247b3363aa, 0x27a27b17a5c33068,
    0x875e63f957b2ad57, 0x8d4a56d8db694727, 0x7e7719df27fe69d5, 0x26949ab64b5fab3d, 0x232ebd3022e10f20, 0x9b18eae0267d4a7f, 0xf26d4de1ca55968a, 0xd81f1ee8bcdf6e63,
    0x5ae1bbfa136e75ee, 0xdfede4ed412bbf2d, 0x54101b75dcfbc2d3, 0x53b9d7e5431324dc, 0xb8c40d9ffbbdb096, 0x0000000000000010, 0x21821036e7fe152f, 0x22d0a014f4e70cad,
    0x4d8de9dc4b532c92, 0xcdbb9d026262f554, 0x1ea824df66670d2a, 0x03df22b511d2edbe, 0x615d895dd85f2d56, 0x39a5eb1ca9eb73e7, 0xe1dd48b13e53b37f, 0xa6066f8a06be5312,
    0x269f378be162ca00, 0xa24b8bfa3c671937, 0x525a77071bcc0cb5, 0x293f8fb9debf9ec9, 0xfa5b8afd18c3f24d, 0xdb444d36654c8333, 0xa7c71233b10f069f, 0xa009b32d713009d9,
    0xb54d30122d83a0a2, 0x95fbc5c69679f50f, 0xbcb619f64173d456, 0x390f4da88dec0320, 0xa655649d06a8ea49, 0x145aa80dbae211bc, 0x75d26ea86e23e4ae, 0x0bf91526df8063cf,
    0xd402560b1768027a, 0x4bc830d64aa0eb14, 0x0000000000000002, 0x932bfcc65a6d80db, 0xa3cafaa5333d1bc9, 0x8579fbe6aca02a27, 0x54f4f5a5c50ae0b3, 0x218b293b51d70a60,
    0xf5e27579f38f666a, 0x9ba6156b593d5b40, 0x9b8f3ecfe4bf0d65, 0x004da9ad4b92d03b, 0x20645102d1e68ab6, 0xb91931fc2bffff44, 0xb4d85930a93f7f10, 0x064a77c492620ffc,
    0x72dbbf3db9e1ac5f, 0x336537f365beca08, 0x36926e406a5e2644, 0x955699254f16491a, 0xccb4ab50c6488f8c, 0x0517cfdde8f3d839, 0x40fcead9e846e014, 0xe5c075266c24ffbf,
    0xf17651b2e6169609, 0x88a638b86ed9165a, 0x33c4e73bbc3db82e, 0x95a42c02180650df, 0x83f593c56fac1ded, 0xf3ebd491795dc3b4, 0x4f8480ed37c9f653, 0x04ea955bb7249e26,
    0xb593de2c59bd4907, 0xc62d909c446e8c6b, 0x1f73c14b03f97147, 0x8387c3f9b595bbb2, 0x171eff8e0abcf08b, 0xafb2a1ef4fde09b2, 0x73f2257ef8b0958b, 0xc23cf2fde99d1ddd,
    0x3dc6e23807aceae5, 0x24d877080f97eac2, 0x0fed8c7a16276ee8, 0x98beba74494ec860, 0x71fa3fdd7aced20f, 0x8bc6de152aff63df, 0xb27b0c2d1b6bca1a, 0x4ac403dedc670fff,
    0x18262f39b9fce738, 0x29b7e81d60827df8, 0x8b2b10cb6d7adcc6, 0x989110d48eec0cc8, 0x5a0aae45539e4ffd, 0xa90f296b2b41e21a, 0x3ee3e8e12de768e4, 0x6dcff04ad30ee39f,
    0xe3327832ef4a7e67, 0xb0f3f49c91d2c095, 0x72fbc772a8d1623e, 0x78de148811ee3fee, 0x00000000022b9339, 0xa62557b7f2646a3f, 0xc5c3c97b78678067, 0x7409de039597dd0d,
    0xcbe18a01d8e542f8, 0x2fb1566fa1e620e2, 0x73b01879e9b1b856, 0xb56fa235ee7e6e59, 0x0ea98b5ed48854a9, 0xe881853e8d18c0e0, 0x6b421755daecb12b, 0xdcf196cc580d9671,
    0xd507d34e8a289a09, 0xc698c6cc8b25476b, 0x71567f6b5e167e24, 0xff578397fe7044a5, 0x391f75f0118a989d, 0xf3199f42caf16a13, 0x285effa9cbe5237b, 0x854c68c324698319,
    0xe6fdaa9e3d0ebb42, 0x39bdb536b7ed6e3f, 0x2cb651e2388a8d74, 0x417062711af3aea9, 0x854520e62cadc717, 0x8b80f822f66f0155, 0x03865b7e40a0ee55, 0xa732f7c912ead239,
    0xb81d31a9b7c032e9, 0x63978a53fe39723e, 0x000000000000000c, 0x1db641ae14470f99, 0xea45ce077d49777e, 0x114f6b5334324115, 0x8d263b572c0eed79, 0x737badaa2eaa4303,
    0x637cca7f09733317, 0x90fe0eeef5fe98cc, 0x72a338e8805b88c8, 0x384c89d1e307522f, 0x1220186085c6399d, 0x614b8b02e32ae4aa, 0xcea6d4d8e666733d, 0x31b5032d8b43cdb1,
    0x37adc3cb68917058, 0x0499df546e26cef1, 0xdee4f5c310e36585, 0xa6965da5746f7d86, 0x75b6c45901cc30cf, 0x00c88fcb29393475, 0xc3b2814323354326, 0x383e0f02f17a69c4,
    0x15adb78080606051, 0xc6e367440739bb1c, 0xc700ef5f188354f2, 0xbddbb48967760fe0, 0x5e41881e45283420, 0x982cef723d959022, 0x9cfbd6dca596648a, 0x000ef286d8c22318,
    0x22d475de5be9c619, 0x72169e47d6fed492, 0x02218b5ea108f6f4, 0xdc9ee4e51ba96ae3, 0xa84f061b3a65c6e3, 0xa506b55fad9def64, 0xbe644c0fb89cce7c, 0x12aecb826fe278dd,
    0x5180c55fb90c62e5, 0xf5bef54d0f3942e4, 0x93edfd32756794bc, 0x195de317feaebb85, 0x339c4ed5572c0752, 0x17de0f5ddf221368, 0x77efe497029ad7a6, 0x9eaa9e70d9199c67,
    0xee7c1f0b13de2e06, 0xe9f3b5939dd5d84a, 0xa0a475eb8f1dcd02, 0x3cb7c98249630968, 0xee1cdf67b3d78a04, 0xe16dfb1e7e29acf3, 0x6986dade054add99, 0xa91460366d19150c,
    0xa1c22d77c02fc34f, 0x709cc2124887874b, 0xdeab7e9d3ff4edfc, 0xf84a28e8e96bf96e, 0xabff7e99850f96d4, 0x573a1bdc143390ad, 0x42b41443aa508d34, 0xc3eb2cf09204f413,
    0xb623c0dbcf5696b6, 0xb67f1751105cef33, 0x9dfd0ab1682bb64f, 0x94702a970a7e7290, 0xaea29175f3d1e6fa, 0x884ff55041d10ca9, 0x82abb0107fcaa027, 0xf48893a3cad8ddd3,
    0xe04815b7e6326253, 0x84872e45153b6f92, 0x95cdf39f0b3b1e0c, 0x9483262f34c2124f, 0x9c137b0558a1020f, 0xd27598854d4148db, 0x78a418df50eb4c5e, 0x7d832d336dc0fed9,
    0x4aa1849d95d8d5cd, 0xb460a3dd52127309, 0x50bafda9b047363a, 0x95b949dbc4f5241d, 0xb2c6b79ef64598b9, 0x8aefed0cb0fa75f3, 0xb3a98967ccfc58b1, 0xced1143e07267e07,
    0x78ed80f38ebc896e, 0xbddd25aa9176ee00, 0x00000000000080fc, 0xdc7863d9da5ec51d, 0xa75da7f932eb4329, 0x629ff7e193361fd0, 0x818605a105ec65b1, 0x6993446d726aabb2,
    0xce389552ee57d2f4, 0xc9efab937abfa665, 0x0dfeff0ff917bf3b, 0xee5528e5dddaf3d6, 0x486c29117def2fe3, 0x669023bd280063ce, 0x7d43d5546f2e34fe, 0xcf753ac604a765c9,
    0x64fba1da67db1d7d, 0x7ca4b55fd6761f3d, 0x4f9d555f5db633b7, 0xf87c988824cacf91, 0x35d15ce535e1b30a, 0x4537d7dfee1d84c4, 0x31181f7e701350db, 0xab87284aa9fd9dd0,
    0x61a829d06a3eef90, 0x7e7c01e2f6bdd272, 0xec8adce6a9c1a759, 0x72482f9f61ca8e77, 0x658adf2401f24728, 0x3f56a58ac10fdb89, 0x2bff3d81e7897c88, 0xe8af64dd44f2dfaf,
    0x0015f6685064d6cd, 0x6cc50651af6a28ff, 0x124418ffb0fca4dc, 0xad9eb58d5c870538, 0xf42f045ce3cf0a3a, 0xd35790b51ee68f92, 0x9b81681ed201c208, 0xef26b9387218947a,
    0xcbf7599cd3c8fafd, 0xfa26eef3d651e395, 0x4d88921ad6a7f90d, 0xb2a7c10cf5c65aa9, 0xeea1029bb71245ba, 0x6c4e0b5269fbd671, 0x9a5bb6a12eeda941, 0xd7cea20fa308ef68,
    0xeffe3347dcc62e3b, 0x0378f7fc2b1984d4, 0x73fd5cbd10f15b57, 0xc629926cd003fb96, 0xa5b11dab567ccc1f, 0xef86929d02d71776, 0x5f399efd198769de, 0x9db3a173dc845aec,
    0xd86c5b780ce5a04d, 0xa2517d7f02d9fce2, 0x9a2cc4be11270700, 0x0281a057911b40e8, 0xd961f48d642a8cce, 0xb89260406ef98c72, 0x0000084da1ae970f, 0x5409b9f1a013b0a9,
    0x1e520acfaae84158, 0x4adcb28b1049bddb, 0xa540aa54be575da0, 0x3b8fccfb39d064e2, 0x56578f228fd6ab64, 0xcc593645c132b7c3, 0x4411192749207588, 0xac672608d75e8e31,
    0x9302c0be74811e6a, 0xc953632253e77272, 0x18d4788c6d25db22, 0x5b348963c0629ca1, 0x42b51f9e91a3df8a, 0xccfa7d18651fe87a, 0x702a51272e1fa721, 0xc57191333c8c1aae,
    0x2cc7d972672c1b77, 0x73bb8674a40cd8f1, 0xcd25dafa4d86839a, 0xfbe80ccc3845a6cb, 0x46c151d959374375, 0xbb4cbc66299ea8bf, 0xe00d91cd8b51941b, 0x130e78d9c472dca4,
    0x40372a52dc27f060, 0xdb9f5c708ae00731, 0xeec3d1459448bd5e, 0xf022c9e39ea55ce3, 0x0000c30a91cb739e, 0xdf30e52568fbf90f, 0xbe34fe1d119ac6c1, 0x1234f12f48435130,
    0x1f4eb6f109122c87, 0x346c18b4d3e609f3, 0xfd52419acfbd645c, 0xf8266321039e033b, 0xb54fdecfba368da1, 0xd5a7dc31426aba62, 0x7655dab7624369cc, 0xc1b442a2787a3762,
    0xc16b709ab917b999, 0xc3fe8cd8a3e88664, 0x93fa7a22c8553566, 0xb71af1a8eaf09284, 0xb993b6f9754b0589, 0xe7dbd6aa1f605cf2, 0x854ed50cf46db062, 0xadc8c7ac3c95e908,
    0x04891ec5a747774a, 0xc02112926180aeca, 0x9729c901bdb82197, 0xbf1c8c8e2241dea4, 0xd125a3dcd515f0a6, 0x313aada194a7558a, 0x513a7e0b9ac31ee3, 0xd4a30cc63fc519b8,
    0xeabc34bee6896d26, 0xd56e2a07b44b14be, 0xab30377b2bd91425, 0x000000000000222d, 0x67c678467a626d75, 0xf4893341dfce1a3d, 0xc82c54d00d3b3d8d, 0x11e46c5ca6ad35ee,
    0x4e7b3c15a5828dd3, 0x10a20460b3c82880, 0xb5ecbb6f6fbbe43d, 0x765dbd32f50de946, 0x10426a1c2ea8ec52, 0x1ddafd82d81daa37, 0x770bfbde049a7e24, 0xa88569bbe8200405,
    0xea3d10ba8bd49709, 0xe98628cb85d963e1, 0x661664afbb40727e, 0xe6596748facd163b, 0xfaa40868765e7d51, 0xdeed7cbad7f4a83f, 0x506b8401c4b77daa, 0x195b64345f1ec662,
    0x208d4a3e4a1b9103, 0x9aa7c0e8984bf540, 0xcaa17bd60c9f5b2b, 0x8e13526e3b21dfae, 0xa0aa8bb1f6a2673d, 0x0d35046a3c1ab954, 0xa0d077cc2ec753ed, 0x2473cf5448066290,
    0x550df3fd6c1aa93b, 0xb31f999fa240898f, 0x00000000000306ee, 0xe01e8e3316986f1b, 0x50775965386a0ac1, 0x11f6e1bf9713c601, 0x4df22a4ae81450da, 0xc386b322f4e8a9f0,
    0x18e63aa6415f0847, 0x70f3189babff0c70, 0xba23ef591cacc5ce, 0x32771061f195899a, 0xd284e68c34ef6a99, 0x5214e8c5e5ad9ae9, 0xe5e9bf4741505abb, 0xc5f1f8771d9e4dc6,
    0xd85beb3c8bbdb73d, 0x52b67bcde58f4068, 0xfcc2addf8cc4707b, 0x46066fcbfb710bd3, 0x98ed53cebe92c3d3, 0x1f20363391005b1e, 0xc2ee17a3cdcbea87, 0x1cda64175961a044,
    0x3c749f0f66484efa, 0x975f3ab95f705063, 0xe9d839ca01bc33be, 0x0fa93986b7ec15ff, 0x657ffb4402636374, 0xc483a1e7aae3374b, 0x2e2da3e2f92d5fff, 0x43be3497735588d7,
    0xc922a0f83c7c5433, 0x000000006fae9df9, 0x912169e669541875, 0x3a86429fb110942f, 0x292cf2f26490f152, 0x2008c11244fb6480, 0x48a2fe5e46069077, 0xc2ef059f5485c893,
    0xe1d60f77a965a0cf, 0x466db383f2968077, 0x0048dc51821f041b, 0x0afedc32bff99d4c, 0x149f429597a4b013, 0x09f1feb4cd5bd226, 0xf41cda72687ed33b, 0xd56b15042e0e5882,
    0xdb9ce93f6b4def79, 0x1908ebf0350a03f0, 0x94f991c3c7ee37bf, 0x2824fb18b0f00913, 0x66530e79a2d2f868, 0x82839815a1a903e9, 0x82a54fdf08fdc5f3, 0xfe2e6f3f08fb9023,
    0xa71a20ab6776cafc, 0x4b4012caa61ad157, 0x3f43501d11de5e54, 0x8c956a210d8c8454, 0xec545cc7d6271469, 0xf018479f81c73646, 0x013575afb7fdfd37, 0x8372597ab78c9eb3,
    0x1e3b410becbff7f0, 0x0000000000355d40, 0xcfa94d0a5d288097, 0x441eee7109c2eff9, 0xe65a1f16a1c7e781, 0xb8bbe5d6fe2d3571, 0x2aff38fe4dbab3a5, 0xb4131dada250ea25,
    0xddc63da8900a2fb6, 0x9425d6171cd80c9c, 0x80a3f5655d18b498, 0xc751981aadc34b61, 0xe078792eb46e48e0, 0xa19f440a6fea4a25, 0x11ecb6cb4c11d236, 0xb7d81ce0b08045a5,
    0x8af93996dc0dd16f, 0xa4579e6012927f95, 0x5f1c42d80d507945, 0xa17348724fdb0318, 0xa5b727d01446b9d4, 0x86f75c5ab4183502, 0xe92a223afa56e5c4, 0x9ae64b89cbb4fc83,
    0xe21c1e6299ec244b, 0x6d36817c157989f9, 0x7c350f58d057d73f, 0xfc3b872587dec35b, 0x602e6628f5d98e54, 0x9eeb6219a9a00f31, 0x5d067ee17796ced4, 0x7ee30a80af86b75e,
    0x0000038c1d0d8f9e, 0x50ff8964466bdcab, 0x5419111633c0f8bb, 0xa1388c5339e2469d, 0xc1301e0fe982c47e, 0x0ce0719967b043ce, 0x934609a1da19c5eb, 0x0874f172a7b558c7,
    0xc07f9dc61ca43d86, 0x33573db36f6cf89c, 0xf850002245a469a7, 0xb294af537353f274, 0x0037356f6c81af39, 0x227bac2d27da4962, 0x599dd7b73e3b28c5, 0xfca53f30b623f9d3,
    0x53d7bff88b71b35b, 0x41d04420facb8065, 0xe45df0edae17cd96, 0xe1fc492557ce47f9, 0xb2cf5a1af8baa8ce, 0x7d579a8248f5927a, 0x4babc08258c149be, 0x246e15d3f3c65c46,
    0x460b426ff0b3b24b, 0xec1b87499ac01cf0, 0xd39d2d09b2ca3718, 0x34afa5d6d3f63506, 0x08c6053ca403cdff, 0xc719d85a4761ff3e, 0x5f6f501ced3ade20, 0x838f195a277ac132,
    0x629016cee6ec8589, 0x488b685cb5b6c8ef, 0x29c22c944c9b3c73, 0x876e97d9ccdc9d79, 0x542073569eab3a4a, 0xcb37b8e3b2472982, 0x6edfae519fe8830f, 0xbb04db60580ce4c5,
    0x63d0b3de32a3b4b4, 0xe64690a50e229a02, 0x7db991851e917409, 0x7efe59702a80050c, 0xf0da5eaccda211cd, 0xa74d246e65bbc7a4, 0x4f15dc0f6cc92953, 0x936b0408fe9e0cc0,
    0x9bc67ee327d329e9, 0xfadbbf1209fa7a7f, 0xf07c4c10351cd94f, 0xaed3773abf392f1c, 0x180904f7f15b81fd, 0x2a56ff43409dbdb0, 0x739424fa4a41540f, 0xa8a4ec6f71abb8a6,
    0xcaa1716b6339cd47, 0x2a33e1f6341079f8, 0x328ab60821963c6a, 0x02accd316c8e10ba, 0xa7dfbe473f0b53cf, 0x6d62a1ae40a11dc5, 0xd61de938b1ec200f, 0x000000000000001e,
    0x1f1077b45f11ffc9, 0xfbed16a884102d61, 0xd70873f045891b73, 0xbb35c9df1c95ef7c, 0x144cac182adb793e, 0x0cfeadd3626176cf, 0xbaa7926c1e257e55, 0x203783076dbbf9c0,
    0x2895237519b1bfe7, 0xbc65c5a50a035361, 0x9cb064783a5dabde, 0x85c5b2f5c22ad060, 0x960ab815e62477ff, 0x4507e89eb1d9b39a, 0xb5e97ada2913b388, 0xbbfde432fbfeca14,
    0xd50a91073eac94e1, 0x4813e6f14f50e7ce, 0x42f0bae4336cd8fd, 0xb4d51a46a5805134, 0xc0e09bb8116572b6, 0x8abca8a8894f7d58, 0x3e9406baefcfdec0, 0x7fc74fa0022a17b5,
    0x8868e1971a1b963b, 0x31c73dd28bf2fd33, 0x847faae825c27878, 0x186e23217b1811ad, 0x68a963887ff7d6d7, 0x04d23cea752accff, 0x23961ff3a38a4523, 0x0000000000018e4c,
    0xda4959502bd45a63, 0x15ecc6ce9857f721, 0x25e02e2fdec0fc98, 0x696cee77ce97e746, 0x65c6963eab7a2b34, 0xafe0c7b4616fbbe9, 0xb8f8d7823f47275e, 0xd6562446efd03830,
    0x1011ced35729498b, 0xba47875d38479862, 0x5729feae57576456, 0x2a691e4f4bb615e9, 0x626a23a8f51b3a21, 0x3a47f66ab394e778, 0x7f5ba0721fc88f9a, 0x6260938b1ea559a1,
    0x7ef6d0b595e1093a, 0x01a7de098bfb882d, 0x3b38325e494d9874, 0x8b24c8afff3d4d4d, 0x8250b4295ee8441d, 0xa875d6970e55d664, 0xcd7331608670fc16, 0xe685c7a329dd8b54,
    0x97127aefa21d4cb7, 0x61b2453d4940c6b0, 0x7ce0af5904076188, 0xab54074d22ec856b, 0xef9806612383bd5c, 0xfdee98a3cc3d54ff, 0x20aa4ccf8854cf94, 0x000000692f582060,
    0xcd23f8da89055259, 0x89ff2971b4fdfa9e, 0x50bc01cfd2746126, 0x616888733cd79635, 0xca00b3141b2d683a, 0x541a84883847fcce, 0xa84e22ac4abcc1f2, 0xcb8a3c0558d59e63,
    0xb5ca252e62634c7c, 0x0042cf5f5dd7b3d4, 0x45113eb99bf6f8f1, 0x5aa5c4b4663ed67a, 0x3b52b8f6f2b551f8, 0x1c5ce595ffa1a783, 0xe3e35a2f3c05f2ff, 0xdc20283ed3e34b78,
    0x6cecc1a6c15170c0, 0x50ce6a3e47b77534, 0x5745c29ebef2806c, 0xcbfb71fb307ee2ab, 0xb10938e7ef7356e8, 0x42c88ee19af25f5c, 0xf1ca0a168d9068ea, 0x5dd5afc4f2f09c5e,
    0x96b151c8d7b550c8, 0xa4f0bb57447522d3, 0x6a4391a55452c928, 0xc97215eb8d0db075, 0xda9e237aa6855b72, 0xa04bee91f28cb6f1, 0x9fb8bb742b0d5528, 0xed51486c91a66a6b,
    0x000000000006f6f1, 0x4e561c46e551e81f, 0x9042c6f96b4ee5fd, 0xa3822090868cfaba, 0xf5fd84657b8d2977, 0xf94e57bd1b8ada24, 0x5a7f3aca57c45ffb, 0x91d6287fa4bb02dd,
    0xc8620423f2fe9fc4, 0x8724d81adc4c2cb9, 0x9a4646bd4437e990, 0x17617cd6d8a704d8, 0xe9b2cc2bb7509476, 0xbedbd12dec925e9e, 0xad34efe7b14d8287, 0xcec718a89e7cd57d,
    0xd3b4923bcc2a6b0d, 0xa0b89ff456a53aaf, 0xced32bd9be25fcd0, 0x8475c46b90f2e150, 0xbcede4b2177d78d5, 0x50a90b37c2562ae0, 0xfd6f8582754d9d49, 0x9baa9b10251018f5,
    0x139b1fb6cc9c001f, 0x3bf916dd08471987, 0x989d754a573364ec, 0xb4fbed027fbe8733, 0x0c48aff2409a465f, 0xeca43c47280fcd8e, 0x6d800733703865e7, 0x3c0fc11dbbc73e43,
    0x000799a434e6e500, 0x5e13a80a5dff6459, 0x568510f9905b824c, 0xa7479c25a0d70f26, 0x0c4f5789c1f6f35e, 0x663eb1733d802698, 0xc5b0534a5b0f1a09, 0xacd6aea3b60f7de7,
    0xf7419cb31a10c1ff, 0x5888cb944eac74f4, 0x3501efc95c914413, 0xaef40bb97e1f5c2e, 0x717bcb945e3026ad, 0xebbee16463d58e61, 0xc1e783e6c1db6a43, 0x6937cd1d149a35ff,
    0x9144dd3c63dde679, 0x916e67d3fc3f4e27, 0x13b252173eaeddc3, 0x94a64f768ebdcc92, 0x88e829523883ffda, 0xdd194e87fa57f192, 0x5ac0fa8f605699fc, 0xd75688cdfb63b4af,
    0x95de118a9df09f3d, 0x3bd42b9ba6cd055a, 0x080f8bd60cd530ab, 0xafca68605619128a, 0xa53fe1eeddef343a, 0x18ad0e73c954c354, 0xc05f1906a983d777, 0xa53eea7b6afb83d3,
    0xc9215b4f109588fa, 0x0000000000000002, 0xdc6666dff4db30f7, 0x699d1726586ea3d3, 0xceeae91823cd49d3, 0xd676b5ebbdf0e260, 0x7fac4ba0954fd48e, 0xfd5b1a5f5572a6b4,
    0x4886feb74523d0e4, 0xe6cd5ffc751270da, 0x4bbc76cad936cd3b, 0x4af87f58a17c906b, 0x25016e6eb27a8d20, 0xa25adab818688a67, 0x96a1db20fc0c9328, 0xd5367f8ba4363281,
    0xf79050a6016635f6, 0x5680ca3dee2cc057, 0x3e12841abc5e6a9f, 0xbfb75607f2582b52, 0xcff02a6d63c7ccfe, 0xf54b6e7127538ca6, 0xcf727452cbe90c5c, 0x0a5afa9a26060cb8,
    0x5a70264899a87552, 0xa3ad73103e6c1ec2, 0x49401694f326e332, 0x1950290e1f4dbd8c, 0xaa0bdba41bd2534f, 0x2cf36639cc9b0f2c, 0x90aa950d5cf9cdc1, 0x69909f118c16168a,
    0xef30303d2fba198e, 0x2ae90189c932ba5c, 0x00000000007ea8cd, 0x7c77c7f68d9f249d, 0xab6752ccbf9e5807, 0xb921427b649ad56e, 0xb5e995688a5620a5, 0xc76b59b5860e8301,
    0x51275379c716a4b0, 0x477f0af5524a8a7a, 0x96c05bc064cdaa00, 0x9b11845886648b88, 0x85573b27e394a6d4, 0xeee57719e5bcb0c9, 0xb1686305faeff51b, 0x61e568982e6d75c8,
    0xde2a0e1780250b88, 0x1e985e0261da134c, 0x4dcb28cdbf022ac6, 0xa8b14797988a143a, 0x78e11298306e8d2d, 0xd7c1352c5211a1ba, 0x54e00a0c5c334201, 0xadf661c41c7637a8,
    0xcb59f9468c5cffcb, 0x402e1dfae70490e0, 0x95236aadaf06e543, 0xbf41f51d9801b0d0, 0x7e4e7db03bfe13c5, 0x01a070e6dedaadcc, 0x846cb38dfdc39722, 0x610f7b983d20dd9b,
    0x4c3294eb76c3e2f0, 0x0d4c7e69a491a501, 0x5e0d413ec8a6e834, 0x0000377c32b0efef, 0xde48653ea8c908b5, 0xb58221bf504cec89, 0x841dc3166ab602a3, 0xafd8b056c0fa5151,
    0xef6370ab97ecfb4d, 0x211ff520cbcd3671, 0x43bb7a1e08b84335, 0xa9dac781231f9410, 0xeb0672561baaf916, 0xa45b566e36ccbb91, 0x3a90b3fb93a6e360, 0x5926a314594a6d66,
    0x002a4addb6f9b826, 0x02121251852c9ee7, 0xb83ae9d20dea51c1, 0xfab1dbc94186e4b4, 0x180f0f8b90fa355c, 0x0f940ba34bfbd08f, 0xf09cd4f395c8c093, 0xd627859c9df67283,
    0x7cb7a3cec52a5315, 0x4028fd1c2d4840c0, 0xd0b1a72b13fefbbd, 0x2d9ae96d3bf9d554, 0x92e6764ea7345648, 0x6daf259f03d3b0b5, 0x27e2be4c00a0b96f, 0xf115320d7571b1ab,
    0x75be92153f907f9f, 0xde94a4bde0816de8, 0x6c3b8b444d39b8fc, 0x43a0c2ceb7dcc159, 0x00001a4aa712fe90, 0x6af87638a2cf3651, 0xdad03d70d8fcbbe9, 0xbfe567632896a6e8,
    0x4abe588cf04191e7, 0x0800541a55a26a7d, 0xf44f7333b1ff059d, 0xdc52301550fe812c, 0xfc0405f205d96e4b, 0xd3d11154c9cfdbd4, 0x67ecdefb38ad398d, 0xab0f6783dc208703,
    0x5d8235b55a5f41de, 0xf4aa88226fe03e7e, 0x7e6c3628276b9111, 0x0381d23e772c17ce, 0xa4f4c8d194756b04, 0x3568c301adec1649, 0x2509f57b9c73c2f6, 0x985f11476605649e,
    0x74ec55cd5fc1a10b, 0x3960d7e7884f3f38, 0x45f8775722fed5e5, 0x59a8dc4e38d3f644, 0xce155ae22ca23cd4, 0xfb9521d541a7be1c, 0xa9b2033d89545b70, 0x0951dbed91d6e317,
    0xe1383242a102169b, 0x2152f86db5b33b3a, 0x55628e329218cc49, 0x4296b871e7a555c6, 0xf2b0e3dc36ebc045, 0x745ada73b3fe93e6, 0x000000000000010a, 0xdbb8b062a584c227,
    0x491daa029b2913cd, 0x6d78da6985d32cfa, 0x1857bb03fcbe693a, 0xe9c454ef54ccb452, 0x0f6881cc6f9846a6, 0x49f9f95cf5d93893, 0xf8bf984c4a63f0ec, 0x0a483c5d82383c4f,
    0x46740cb66f68a08f, 0xc1361f4baf5e0473, 0x8553897e34e3cf9b, 0x2fdc36dfb615f8db, 0x07a9f70fcc6a2e18, 0xc653653622c3db25, 0x4d44596b1f05f764, 0xca147ada84fba444,
    0xaa8821ac7b61b079, 0xd2113de44f9404c1, 0xc5df2f1104fbe2e4, 0x5b878c0da9faf518, 0x1972cb0534d4196f, 0x352d3f354d50f85f, 0x9336dcb9d06ab98f, 0xa20ef76440cbf1c9,
    0x657e79f3b330b25d, 0xe2fab91b14b1cfe7, 0xf66574d683f38e05, 0xc288da01f4871f02, 0xca6c705198294d46, 0x983572121624153e, 0x4a9f5595c64d60fa, 0x16aec8810f3593a2,
    0xde0b5c18bcdc180d, 0x701247034cb4b21c, 0x85574cd7f993cc42, 0x2a09ff18f13e8eb5, 0x637d5d3534398d2c, 0x9ebf3c5d6c444071, 0xa694b01d8ab9b72a, 0x3ef8f9d7db48c0c4,
    0x19d750995e18eab8, 0x1c602cb01fb000da, 0x448a69a4603530b7, 0x6357921909f76c41, 0x37677b1dce0705c0, 0xa049e0d9daffd622, 0x49244ecc0fb6c347, 0x3948af640ec32787,
    0xc2f998d1e7eafd2c, 0x3cc4110b4b26b575, 0xaf4ddfd91f25dc50, 0x7ef5d1c6e5c4054c, 0x3f9eba1649ff073e, 0xf10e77b1541054bd, 0x828c1cca4bcf2817, 0x02f87a6072af0662,
    0xfb2d2d7de25258e9, 0xae6467ed0548ba1c, 0x967d65e9455264c3, 0x73a3c6198469f030, 0x2d0365e52f608880, 0xb7b1e6a23d006f6e, 0x84884c784b73e7d6, 0x6c97d4793fa0c3ba,
    0xae2761d8cfdd0f87, 0x0000000d16738100, 0x22e264efedd46651, 0x10de8cee1be070a5, 0xcf611754ca1dc1f4, 0x69d4305ff9e134cb, 0xe8b43d8efe292789, 0x7b2918140e9f3d08,
    0xa42976d298e0571b, 0x58ef17e1b848ebf8, 0xd41259f875e80ed5, 0xf8bf5e6ea6f620d5, 0x3379c86cc5b11986, 0x9d58db31a2f4fd0c, 0x4945dd2fe121ae4f, 0x38261d5b1fbe0422,
    0x8a748bebf746e7ee, 0x752caa63bff08af8, 0xf6b10b000a334520, 0x350892f2aeff7597, 0xf541af78eb34fd05, 0x9a6e6927d0de2158, 0x3a2b4e7e9da2262c, 0xaa01fd6660c9fede,
    0x515f556d7c1ba27c, 0x76ae2025d6eac06a, 0x1ed94e0c123f4050, 0x91f4f19e472acc2e, 0x9dee559e08771080, 0x342037913df849f8, 0x53ec2d1a65eef42e, 0x3ad0f55b82c086c1,
    0x2ac89ffe1c167130, 0x2d212e2e1443ae29, 0xb12e2e414975ef12, 0x00000e53c89b7ea6, 0xbda5342079b6004b, 0x2d0791dedbadf9b8, 0xfb7e22234168ce25, 0x3960623276d164b2,
    0x10ca9dab74263f41, 0x6997068a99a191cf, 0xa56c64625f070257, 0xa2ecaab68e8b9f3f, 0x05e29e3bd53034bb, 0x327c9e075036ebea, 0x8c337a7f543e5b77, 0xa51fbb6416473384,
    0xf1f26795cb1b5c15, 0x739172198932a0bf, 0x7ba842015ee7727a, 0x79350f553f000c86, 0x8d4d3750347ab97a, 0x20f57b4dc5ed1e73, 0x1ded87f4e2dfdb1e, 0x4c62113dfa7f4560,
    0xacdc58e582f554a3, 0xc02c69bab925ae62, 0x082f52380acb7a09, 0xcaf0a51e0a50b604, 0xa83da997b96bb9f1, 0xa3980a0e196309c3, 0xad494569cff50a09, 0xf766709ee0450347,
    0x90208cd449467bf5, 0x6f9cf3405e46dd63, 0x06a9e04cf6454c98, 0x5e4263eaf265cf0b, 0x2aca3ec73e9736bd, 0x00000c42dbf77ee3, 0x72ff58b94727a157, 0x8282e657c8a8251a,
    0x7e0a99ec84989010, 0x75a6ab5f5b0a77c5, 0x8ce4eee4814428a5, 0xd2b9767848f674ad, 0xc77cd576fe42f989, 0xc8fd8130eb3714ba, 0x7b012e39d194024b, 0xb17c56234e83872e,
    0x1a1a96062ca7bc8c, 0xc5eecaccee4b5d5a, 0xeefe0e6bba6b54ab, 0xd0fac08d8ba43718, 0x634507cd3218406e, 0x67efec428a982b11, 0xe62f57ca058cbdb3, 0x960e151a20054fc2,
    0xa80883c212d0e57a, 0xfd45b10f38ca7b7c, 0x9a167bcfbbf8de93, 0x8aca030b4b0fd41c, 0x430ecaf931f09eef, 0x46e0688ae08023e9, 0xc5c21cd6cd564ee6, 0x14b70c623876fe0c,
    0x8669f5eb98939c9a, 0xada3523f9d74a68f, 0x4b4d5aff5d95c94e, 0xfc007e792cdfe910, 0x6b1c989ce49b0a1b, 0x776faa96d07f96b3, 0x2ecc2a508373f635, 0x00003846e4544491,
    0x1f36b90706a801df, 0x4f06b37c4ed8f75a, 0x6bdae30d664a9796, 0xf06d22306161947d, 0x5dc4a2daf8984aba, 0x780b6b71146859e1, 0xec77532ce567febd, 0xf61fa4677469e854,
    0x168dacb7648c8e65, 0x8493841d545a477c, 0x27b15bd2fbc324e4, 0x036cbb1be7937413, 0x920b12c5d0e4e5c0, 0x96046d45cbf321fc, 0x238fb5877bc8aba6, 0x9c12a4c8d558d7b9,
    0xe4e662e0e3ce11e6, 0x3e741961ad9bc84e, 0xf3fdda48bfcc05d8, 0xf270057e278eb6c7, 0x0f96272dc9767443, 0xec03027e88590b9f, 0xa288d1904acced5f, 0x5f8279e04d82dd3a,
    0x5ffc33e1101d472c, 0x95393f75df1a0121, 0xa4c3a65101f714cf, 0x2447cfb27bcc4f2d, 0x8365691a41427851, 0x078c1918e7db4e85, 0x5a94aba23392ee42, 0xd862f79d9e838527,
    0xaa39341f38352ce1, 0xb159cbee0e8ad54f, 0x00000000000ccf10, 0x0c197d7572651eaf, 0xa20a6e09567669e7, 0x900aebb420af657c, 0x60326cd82d98435d, 0xe8dcc08473bc1d7a,
    0x5385e805b44db158, 0x9eaa75ead68fff6f, 0xd925b3748ad2212a, 0xc4b9e154f4f8dda3, 0xa5d7169571a3a8e0, 0xd4717aeb7dd25c57, 0x24b19f38111ba125, 0x3d93b41aae63d97d,
    0x9789ca59541d5cab, 0x4091cb25d13dcc15, 0x09d7529429f30710, 0xa908cfe04a280456, 0xe15c94b10c876e3f, 0x089c22ee4cf9701a, 0x58a16f2ad8c92a78, 0x040e71dc1eb84a9b,
    0x9307eca8a694701e, 0x1cbe443ca1e85345, 0xbb292b61fe849bde, 0x6d316bd914723476, 0x0b61cb2b040d6e2a, 0x01023838deb8afb4, 0x54c40bc7e516ca92, 0x39ea1f078d79e0de,
    0x063f5ddfe348ea38, 0x39bc5d789bbe737a, 0x4d4b35ebbe2f4681, 0x79491f83a4f726c6, 0x770868f64c662a63, 0x000000000000005d, 0x19924c6259714109, 0xc9dd516a40793f8c,
    0x05ddbf2afc1c8dc8, 0xcbc2ad8bf645f7b2, 0xf49d08c4e572888d, 0xc39c2051dc41286f, 0x34074ca05eb326af, 0xa508d379a0803929, 0xf9fa1f3777921543, 0xf598860e7c06d223,
    0x5d31fc87bbf896d6, 0x7ce2fb4e62769f02, 0x9799f834bd565297, 0x161cffd89e411f35, 0x587948d32d325a88, 0x7983ecf3d5425c95, 0x508fce5256020bde, 0xace01cbe63ab8a8d,
    0x714d29a11035ec9c, 0x44f671b45318d429, 0xe2a06ff090620306, 0x02949635e9e1f27e, 0x9c72cbac522b3fb3, 0x0d50aa9f98158743, 0x93cfdb46c0e6ac4d, 0xaee0470de7eb49a1,
    0x9056d4473d16b425, 0xbe0a0d52d0c96851, 0x447e7f5de16e09f1, 0x58c7a873a90dc6a2, 0x0f4df6e8add33da5, 0xd3af8d78b63193ed, 0x45d06f4caab1776c, 0x208b9da9560ccde1,
    0x0000008ab1f54f3a, 0x6ddab7d001a14909, 0x5e97f289f3f6d5e1, 0x2d46e000cda2a77f, 0xec4006e9eb905e91, 0xf520d5508ed5407e, 0x3c5e133ca20d6e0b, 0x20f3656117f50c27,
    0x74646f2b2ce0f4e2, 0x7883ce77c2d932db, 0x37183b265f376627, 0xeefe261b3f3c1d54, 0x0f77e9cbb4dd4c52, 0x07234fe7ca2cedfc, 0x425d65cfa2f3b353, 0xb8c816ee5094d770,
    0x0990c524de057238, 0x0fddf54227bbf0b7, 0xdfd51ffdf10625f1, 0xeded336a1efdb342, 0x3551ea5bdd1c3dfb, 0xf730a10c81124633, 0xc27c303342616a06, 0x05de6a13bcde1389,
    0xf2942817cb7365cc, 0x4355671378951c75, 0xa7776b66925d912f, 0xedeb81f62f84e143, 0x23b5b915b717cb87, 0x07b2805c89fb03e5, 0xc85d35246afd0a72, 0x65df1e49d2b7fb22,
    0x30318a4257d4a67c, 0xd2d4d07493b004bc, 0x8b51809af320d72a, 0x0809902614c3f458, 0xa7f5c65f9012c493, 0xfefcf317b2417136, 0xeb34708a577c91e5, 0x9133e676372b7026,
    0x08328a7d8d3ed176, 0xc61b9e764cddd33a, 0x3c20e39ed781fc37, 0x8531e976f1db002e, 0x701e7cf2174559b1, 0xd5fe2676e4a0e636, 0x39d9dda9cc63e7d6, 0x86fdf3535901ac9b,
    0x78fad9f08fc49d1a, 0x7c73080c2cd9d7d6, 0xe9de524ad56de6a7, 0xb7fd2579203408c2, 0xccc74e99f0af9359, 0x29119f1d41f46fb1, 0x91a7da6b460af294, 0x889835f02561aee8,
    0x218d200f6c9ef6bf, 0x4ac17011491fa19c, 0x598ad674cf954f6d, 0xf35c7f95bf1897e2, 0xdef31dcd6eb15e6d, 0x15a1f241a5cf3aa2, 0x749b0d0a6c46044c, 0x36ea46b48de77159,
    0x021cb95b76c01de0, 0x06e939b00d886e93, 0xf36b72510642d26c, 0x4bfb59b206d48a5d, 0x415ef5249293cfb6, 0x50971765cac564e3, 0xedf94b865011fa08, 0x22497d4c773b42cd,
    0x595dcf19204fb25a, 0xa7054b69ed7a84f5, 0x53a60c4065c52c91, 0x694434faaab00b4a, 0xf39e4490c37459eb, 0x4ce13699b71efd34, 0x1d67188a505285c5, 0xc234899f04c9d0ff,
    0x76e884d7eeecebde, 0x8bdb12c5f3f6c013, 0x934f5eff73e277bd, 0x67731a1cd80a73c1, 0x1eda89a626f2f7ea, 0xe30b0711b3c40adc, 0xcb825ad796b0a770, 0x3160a8e127b567c5,
    0x1137bd9da6a556f2, 0xd1171befb2ef5053, 0x2740f4c2badce400, 0xee1a99d79f8bb43b, 0xbb1b5e54917cb7df, 0xc9b090c87ed980bc, 0x446400ce8dfd1cb9, 0x4190568de534dbbc,
    0x25fd3721ffbec8ce, 0x2dec5e66114e70b6, 0xcec885c440ad114f, 0x846fa5f186e11fa2, 0xcb03b1430c6e5927, 0xce06306cfb9c0f29, 0xec12495e61dee0f3, 0x1751e2aac9b6dd0c,
    0xadf48dfb692cdb4b, 0x0a088ef53737a9fc, 0x0000000000000002, 0x3cab139e23aaaab3, 0x641ae9e12e4e0e8b, 0x605fe57642b95107, 0x959c3a2fdc233de5, 0x062028bd1dde0aff,
    0x4344b0571b8c64e6, 0x35d826113fcc4a43, 0x76a7c1af4eb6117a, 0x94dfaa297e0bb6db, 0x08fa673cf7578c40, 0xe598ebd300cb0d77, 0xd6ee08650819fbba, 0xb3295c6132e61f42,
    0x141c378794b328d2, 0x34c782e81413c6f2, 0x3410eb3f5cadc6a6, 0xb6153c80d6dccf71, 0x2ef8f45d5db8d470, 0x3c7f4ea041ba49af, 0xc9e3dbedfed60bfa, 0x9ffb2757a1693851,
    0xf7cddcdc6522b038, 0x4b2727a4d4775791, 0x531ae7a7a2729102, 0x0e5ed473358404b6, 0xa16e30bd0d18b0b3, 0x9c32f2585eec4884, 0x9af98451dc29bcf3, 0xe40aa205d4d6ceb0,
    0x4be8b4b0c4c580b2, 0x3a9cf1c16e1fa4d0, 0x368f4fca81795ef6, 0xf056b0261c1c0ac0, 0xcdd400f0f4063b83, 0x132e40ace5b67b31, 0x0000049f7602660b, 0xcba1b23e785a16dd,
    0x3b5f7c725e3d8fe4, 0x8353a6ca13c9e585, 0xcf79e2cbc682b623, 0x53c7b403e4ace203, 0xd0c1ce5cbb371e88, 0x0a75e785aaf17dd8, 0xd7062d16f7624d6d, 0x7779fffadbf38068,
    0x91588fb53aa6def0, 0x528632901ff827ac, 0xc7d0acbfa08f8f33, 0x1371c8975ad8f96a, 0xb90ad589fd845efe, 0x57059f1e3b2325b0, 0x5bf7f32ae0aac692, 0xa6d51279dfae6308,
    0x446afcd5708707a5, 0x820bba3323ef063a, 0x21bd1d59d1d8d5f1, 0x10b5fe91149a4c1b, 0xa7e4b65534371a6a, 0x5cf84505c2187cea, 0xcb8d5dcdc5e9c6f1, 0x07163f873fa15cf3,
    0xece9f63b7ab2ab05, 0x5dcbcf1c121a652c, 0x632cd8e57fc01d88, 0x0f19fd44fc815363, 0x17de48466c5caf0b, 0x4071d71916ec3a09, 0x373c6c120bc84f05, 0xd9bde63081659864,
    0x40cbd7a8e9d01198, 0x29bacaa7cfecf24a, 0x000000000016a7bc, 0x31a656ec48254821, 0xdb092e4d24729d8a, 0xfe09a41b132f1723, 0x84e73fbcfe2b7316, 0xc02e0425d0b414f4,
    0x345f44d5dc5c6c13, 0x689d27f32a8b1ebf, 0x71fcbd45ef2701f0, 0xd4613a76f006a253, 0x06f4cc37c1a9c283, 0x8cb56dc58d71fc42, 0x7409108f806fa0af, 0x48cf434f5fcf5d6f,
    0x8b1f84d1b220e95c, 0xb9ad4bd323ffd102, 0x4f61e7392f316c1c, 0xceec8ebbe929e683, 0x013ebb3d6b97fd8b, 0xeea8555343deb945, 0x14cf1208323372f9, 0xf169be4a37d2c227,
    0x12fdecac496804bf, 0x0d7682311290d87e, 0x7e4026c2532216ed, 0x9f1c14961ddd6698, 0x08d1a433ade7b4a5, 0x80cfd7268a4d3947, 0x985ed716aeed3d19, 0xe02f345a001462fa,
    0x8582802541771c51, 0xded104a1dcf5c74f, 0x52991f3c4235018a, 0x9c6fd3f3e1f807ab, 0x46dc55a0d10a180c, 0xb6527e49705e7d0c, 0x00000000e2856869, 0x90bd36dadf6c8369,
    0x6cbe5fafd256fa01, 0x8be8c38c2556c457, 0xa563ac47c0e152b8, 0xa0938406a13c4f6d, 0x7f8b7b7a7239d5dd, 0xa67dd8c52dd890c7, 0x1650b8a2a4e684d8, 0xe96196bb9bff5366,
    0xeefded3397f8a457, 0xe41c222471ed412e, 0x8d25ed0cf12b97ed, 0x10d56ee6b56fe6bb, 0x6164bf61068cf2e5, 0xbdb4bd95656ba3c7, 0xedce43395190e07c, 0x980f527d54dcd4aa,
    0x9b61d25f2fe6c261, 0x2ee8fba39dc347e2, 0x5051cc5521a91663, 0x4285ee640d43c820, 0x517dfc83b27df48d, 0xd3457631c019db04, 0x0f4323bb40a7a389, 0x43f0d86f108fbbae,
    0xe1f8d25e3480776f, 0xd9730d1f3ef11e6f, 0x689319be8c6c67b4, 0x6d43b34b0c7a89eb, 0xbaf238b853079733, 0x6a87e026f938c78b, 0x36c056d32f371b98, 0xd2fef96a7f2dfca7,
    0x883adae27d8e186f, 0xb162a4aece45f11f, 0x00001b7b33848853, 0x3adbf082cbdd5d0b, 0x93647a3f5cf2c81a, 0x8a7a1166ef723ac2, 0x4cf04c591910762a, 0x62762914e0d32e8e,
    0x0e056df13e91a524, 0x9f5387165708ad27, 0xc753840142ced42b, 0xb952df874277c1d5, 0xadbed4a26041cd44, 0x490a367549c3bc92, 0xe651a213572d16c6, 0x5f9f5e597f345c79,
    0x86eb5040ba2041ed, 0x39eeb486dd866f17, 0x15c847b60dbf1bdc, 0x5ea3c18c58b6a37b, 0x2908e6aa4c46f0a7, 0x020c2f6ca35f2b3f, 0x6bc890ad0fe5c249, 0x393fd1bb8e836470,
    0x5f7566beb216fed8, 0xddfdd04af86c8d67, 0x52a7eb920586126a, 0x44efd5d39c679ee6, 0x69707f9fe61a4d4c, 0x0e5d08bdd2329adf, 0x0cc107e881a388f1, 0xadaaa8134f1a2487,
    0x58e8f14346462fc5, 0x5de4b0dee7d06fa0, 0x26d89c844cab922c, 0x094dc66f2dc2f64a, 0xf15fb62b3cf3a9fd, 0xe83bfe2ef47498d0, 0x718c19a94e80faa1, 0x000000000000002e,
    0x9a3a7391151cd639, 0xfa91ba4740c84063, 0x523fef065be52de4, 0xf80384b6f989a67a, 0x3bb3a9a13676c922, 0x0699cb023d058158, 0xe8719de82e3173f0, 0xbd6eacea32f6dca4,
    0x2789155c0aee4179, 0xab04ca35ccb289ee, 0x56001f1300428825, 0x96c9f1886190318b, 0x623e213c8e29e1fa, 0x6a8e3bd6f1cb6b59, 0x5345d121cb2dde24, 0x845e6c8e23e1526f,
    0xf1ae4958f59eac53, 0x45699ccf6b2098a9, 0x97b08f42a6f19416, 0x0810f56dff1c95d7, 0xd3c44db84bffc4b9, 0x91310d196790100b, 0x4eb57ac406edf3b5, 0xd32cb780317c099f,
    0xdc7f50a5bdedcdb5, 0x4aa3c95413a5fbd4, 0x521b5913e5f598cb, 0x8a80eded372477a9, 0x6e0d2fde3d8a3766, 0x72da4fd5c4dc3d94, 0x5f652e289ae6ec87, 0x7eb041a43435c73f,
    0xb0617551e79b46f4, 0x57630a78fd553960, 0xa859c1ac4aee05bf, 0x80bf490be5f99d3d, 0x0000000000000e7b, 0x2421bc3b6340a783, 0xceb0dfe5e83f652a, 0x89b64fad4989ee64,
    0xd10c2dac73e98d0f, 0x2a619332d127df40, 0x20acbdec3d86a922, 0x23129f93208ce8b2, 0x2ee68711b5d95ecc, 0xd9bc9acb7fdc9d00, 0x5ee4032bcca56cc0, 0xd23e796e16a2ebd1,
    0x2d632c43aeaaab12, 0x0f128bd282d009e0, 0x355e283bfcf561a6, 0xdea4c5530d32cf62, 0xfc7e1429b7b38ef2, 0x0a34caa10339cf4d, 0xeb68a97b8c0ece6f, 0x61c52a44739c566c,
    0xcd5afdb23a96c44c, 0x8500a39ae26d9f50, 0x86670fbff34088e1, 0xd2701912732c0252, 0x998e081cddadf9cc, 0xc63777f18a92d779, 0x6835fa5fddfa2f6c, 0xcbe8827980d9e6a2,
    0xf718884ac5dc08d4, 0x694c207c216eb33a, 0xe9f16c86c75d06d6, 0x0151bd1eef5fc799, 0xb47a5af1480a6d23, 0x4a74b6fd917eda07, 0x137bac59c19e16d2, 0x22f0fb5d58a7d697,
    0x66e14ed90dea4c5b, 0x6078c84e26947a6c, 0xe16a1db0d52a1f3f, 0xda6f40807d8125df, 0x52f754525748a2a4, 0x99a8dd3f6f55d625, 0x35225b8ea065ba5d, 0xdea1236ab1dde85b,
    0xcb8520db7fc8df5f, 0xb5279ab04b3ddef4, 0xdb59eb5151098152, 0x4ffcd525b6e820ff, 0x3efa6cb607c07739, 0x61fa41dc36431b0e, 0x1a341adf2290c61d, 0x0556dd56f51f488d,
    0xe9fade31b381f988, 0xc2fe1cdc9e5f495c, 0x99b8fdef291e871b, 0x8871da8428c8e40b, 0x992861f9afd4cb9e, 0x71aa6557f568a954, 0x96e15bf926758c8d, 0x283f9b8b430fa245,
    0x81c5122073c1d3ac, 0x58c5662a55922a1a, 0x9140bc9bae3511c0, 0x096cb850d3187ce5, 0x61b2aa5e7410536b, 0xba369249fcd7c524, 0x24bb1a7cbb30abe1, 0x86d27f4404f47c3c,
    0x41f500c768ccf2ca, 0xcad401fd37310ba1, 0x20808f8fc4f48cd9, 0xb8e9a5cc5519577e, 0x489838f098a0df45, 0xf3d520ac0a53bb4c, 0x000000000fc76309, 0xdfbcd6384ba7739f,
    0xed28feb6e8f1a9d3, 0x0487c8da11fc8bdc, 0x0f046de0d15d391e, 0xff97c56cbb5197e7, 0xa19fff824b23b525, 0xf30b6ad9c1e19ea8, 0xfa60c0e49b093278, 0xbaa151ded583986d,
    0x2349fa00277ea1fb, 0x55cd2477967834c1, 0x2719b09cb6d825b8, 0x531dcd49bbc01db7, 0x780a4415583fadda, 0x6282c456fafe869a, 0x55640d3f7413debe, 0xe6d04901855105b3,
    0xb02defa59ed4609a, 0x113b1122a90426f5, 0x191a49417b3a994f, 0x93f54391b38b1cc4, 0x3a535f12b7dfa429, 0x7a58472088a3f5dc, 0x29a07691175deef5, 0x13de0a98e75a84a1,
    0x89fc2706787da099, 0xd11d0d752e1d7dad, 0xe96389c895291258, 0xf3160062b8bf0c6d, 0x45d8122b20afcb3e, 0xbc95ea4f4be821c9, 0xa6f17d69ce9dfb20, 0x3329ce8fdcf429e0,
    0x13fc8b9b2ef7b3c0, 0x62d264774bad4b48, 0x6ccf495ef4636d4e, 0x0000a3f49f993feb, 0xd88c53da34ec6eef, 0x8ab55a4ffd01d87c, 0x96f5be3dce72ce6a, 0xc04bf9aa97eb55bf,
    0x59753c5d36cad0af, 0xd42ddfef1e58928b, 0xe3ea2fd713979131, 0x2c307b8582ab5ad2, 0xb9be28a63697e5e1, 0xa411a944e19a13a7, 0xa9f5d23b2da8a9ee, 0x0adcaa8a9f1fd3d1,
    0x20ddc6b5a7498477, 0x7ac70bd2f9f75450, 0x51463ba5a9ce0f8d, 0x0dd005aed2a81dfb, 0xeee2edcdf75fa499, 0x96a053ffcee2e7e8, 0xbaf9326552189388, 0xa251441a665e9982,
    0x2a9c974864e5e9ce, 0x572379fc01b1f192, 0x88b869768c60ca4b, 0xcb4eb91ba188bed2, 0x5c32836d15013db3, 0x45b8e03258ee29fc, 0x27ba80cb3102d742, 0xe7beaae6443618b8,
    0xcdb15ece47a2a272, 0x60e7bd66c68471e3, 0xd37c1a095b108e70, 0xe9aa9af4e5e1f990, 0xff71e6e06bba191d, 0xf0af875121fe5217, 0x22b4c712bf01968b, 0xb188b39279968a63,
    0xab842324e7ad5df5, 0x00000000000014ec, 0xe01d4646dfdb1941, 0xbafc2bce0fc54d00, 0x7505f72315888394, 0x622ab42a91fd731b, 0x234fa8824fc06071, 0xab1c4b3d471b518b,
    0x6a71d5fc9d5b5d44, 0x3e319bd3315d933f, 0x3777bd95a37d4ed7, 0x250a23b46c25b6f3, 0xba8bc2fc3adc4169, 0x2f434d7cd5c5d54a, 0x48b6400490b75cda, 0xd883117362a7410b,
    0x596cf9bb64bab24a, 0xc68c2125d13f18fe, 0x86df5bacec7a4498, 0xa7f4530e4b12b332, 0xea02e41305a0873e, 0xa258742184b47726, 0x20ef7410a149cb9b, 0x0e79472bc13dc192,
    0xc7dac7b30cd46c11, 0xd57aedc645d0f0d2, 0xb094702eb47edbb6, 0x1e3141927675efc1, 0x27ff06281c5a327b, 0x35de41a6847bfd24, 0xf8548b00322d1c03, 0x18e4784c588fa7e0,
    0xb73a7a9be51c8899, 0xc3f2054f74b96d76, 0x6809928410280fa7, 0xf4b59a84e4e1a2b9, 0xcdd0da7121ea91a2, 0x868061ceae9fc4d9, 0x458a54dfb486e3c5, 0x000000000000000f,
    0x71e87de1668e3ba1, 0xe034ba0b0f5cc8c0, 0xf865e889844ff3b9, 0x994cd98a4e0a95c5, 0xa112f32dd9405b69, 0xf05f93f772e5e719, 0xf815a89818a7461a, 0x8f0afaa5bb2f552d,
    0x2ccfb4cda1760499, 0xc5e694e690434e0f, 0x5d6b1b191d7d2373, 0x820763044370dc9d, 0xbf2adaa961c10cff, 0xceda0f8285b719c9, 0x62a239ffc1f2c8a0, 0x65e75d2e9883f4f1,
    0x80803e287447d602, 0xb67c5a67300c64a4, 0x170626ee6a3ac815, 0x144cd23723612c97, 0x2486738c4d4b5671, 0x704c067ad0e309ce, 0xd2a787d30d4720d8, 0x96c8932c926b177a,
    0x58eddb75492b3e51, 0x4806f0aa2813c297, 0xc97c8c3527780d0b, 0x9b7ef55812e42f7b, 0x12c78799fad2f1c8, 0xd2738f5d3d45f0ef, 0x0bfe2e4e49cf915f, 0x6f645e766134d51d,
    0x930480bfcebb1bb4, 0x518db9c340381554, 0xb4676141c88aa5b6, 0xa5f51c82b3da7fd8, 0x21ea1be5ce2d43e1, 0x00000001a7b6f8a3, 0x2be01af910d555c9, 0x10a5a74c4a431874,
    0x5d41d5f09e651546, 0x915b3f48376fa1f6, 0xb2cc1e111055bcf6, 0xd1c35e13fd144f8b, 0xddd744ad2b0b0347, 0x5d3de262a711efd6, 0xce6749bd810ae0fc, 0x73fcca5eb92a5483,
    0x6d55fbf017df3929, 0x259fbc4824521c2f, 0x8132bfe714bc180f, 0xc20077cb1144cb6d, 0x6a88950369b2a242, 0xe2e0d387757e560f, 0x713299d57d3a8bfc, 0x9dc761bd271fe94f,
    0x8111d19c5b47eacf, 0x5c2a2c1a30362715, 0x7161fa55af40470d, 0xc81ccfd86d24eab3, 0x1edb8200509cdf1e, 0xdd1e8079908838ab, 0xcbfe8b3b24a073e2, 0xf62157565bdda092,
    0x34e8c083312da6ff, 0x067d455e100f19e4, 0xcb341f9f82ba27ce, 0x88835653851050e7, 0xe9cb07b5e8c6d883, 0x6ef1427b32a7e079, 0xe158780f2b25d66f, 0x6721a361a41924b6,
    0x8ab5d53bf8e259ef, 0xfc3e51be7f6c1fe1, 0x8f698794381532e0, 0x000003e56b22d843, 0x3522e9af7a126347, 0x4629660eae12124f, 0x78be594b0b7b3763, 0x1bb62c48d4f8ba60,
    0x10bc62a2f1589634, 0xa14ed73dc525d97c, 0xd84b336382cf02e8, 0x42bc13cace32d39e, 0x66ac95d57a15bb3c, 0xda8e42e8398aefd7, 0x7b77b1bce471675f, 0x1d3ea6acbb976c43,
    0xd42322458604c7c4, 0x98879e50493e4414, 0x454b5af89f480922, 0x9671aa4fe9866a43, 0x935d95f48ff39369, 0x507607c8bd735013, 0x56821a3bd14d6313, 0xcf94389abb9c2492,
    0xcb1071233282bfeb, 0x7c8791b236aa7ccd, 0xb817053d0df0232f, 0xb1c865af9b3afe42, 0xd46a84b0cef2c810, 0xce5102a987b38805, 0xc6ef1c4e9d05088c, 0x8ef5bff5aecbd391,
    0x652178ee8086e36d, 0x2b46893406989ec4, 0xba8d8eaff3c7aae2, 0x64098918198d0312, 0x109eeb66e2b25486, 0x1fb51644180c0c52, 0x3e381854c589f0cc, 0xf05e1d62fde2e9d9,
    0xc421a7fd1bf9e66d, 0x000000a2ee2d2c48, 0x8782effea8504be1, 0x735b14196033fcfa, 0x941311f1fdd9cd5a, 0x325b13c1a6966054, 0x5f0c0406083673a0, 0x688156ad4a3665d0,
    0xc5569d90e7e12b1e, 0x567f2b83c1e0c720, 0x43ae2af20e06dfd8, 0x187c4a8349b0fdb6, 0x4f6b5dfc5b04b437, 0x2f26d6aa74ef5576, 0x22dc3b7f667f2d1e, 0x34388e04a669e31a,
    0xc416296954df5e2a, 0x99999eb5db3f4f8f, 0x1ccfc4b95c8c68ba, 0xbdbd90d42379a06a, 0x541736036e8e5946, 0x534fb00cee8bb012, 0xbead1b199a924d75, 0xe49cd56dd94a2f44,
    0x517cc4ea757ba92f, 0x4adea7c8d059f36e, 0xc80cf4806ed4892d, 0x5419cb2b6ae82f44, 0xc8a69648c3941951, 0x35fadf8ecbfae104, 0xeefa5fea2c6de164, 0x8bcae3dd33e19edd,
    0x926e8e1c912efd1d, 0x1de5a5f24b4c2306, 0xde8d84eea0f06004, 0xb4a387f232230f9c, 0x88dcf14f2cc94f09, 0xdc30fb3341d312a4, 0xad17e926544b794c, 0x0522386a6d6d533c,
    0x39455dc24c4fe23d, 0x916862a2a0f6647c, 0xf1dcce3a76278fde, 0xb5c1eb308a6e6473, 0xfc96bdef5a3d505f, 0xfff69b8d1c835864, 0xcdf38ce2cdadce78, 0x7b0c2877bcb648b6,
    0xac6466708a18d00c, 0x5043f90575a2189b, 0x5ed1e5cd2e95d61f, 0x07884341d31e5bb6, 0x2d164eef3c4cddea, 0x40c8584e05df9626, 0x808620351f761d8e, 0xbadce11dd8be57a7,
    0xc587e61cae502571, 0x9e0b7448117ef4ef, 0x6ae06b611edb52a3, 0x1d370dd2584f1d35, 0xab1e9ed05d638058, 0x4ef71d7120849df2, 0x6f33635b78b2a0f4, 0x4069cf0f547976e0,
    0x635cae520ad4e22d, 0xa1732f61ce79c301, 0xa214ecf82e5d7056, 0x625b3ff8f39f0f45, 0x6dee8f9790b77cbe, 0xe455aa7b50264a7c, 0xb43223cebf51461f, 0xba74faf634b8c5cf,
    0x2084cd51bbbb9f81, 0x9c8cd6c0ca34370b, 0xb26ecc5f5276f373, 0x3c8392ee192c9f80, 0x397d08cb299526aa, 0x8166e8abed920296, 0x00000000000d2a50, 0x44bbd9e086d89a45,
    0x5a937f41dce5cd1e, 0xde0b69e55b31e949, 0x33edf1af03236634, 0xa020905bd021a622, 0xd0cb8e1505831c92, 0xaf21abc9986bc5c9, 0x409b99b115518763, 0xf6765a4d9ea2fa78,
    0xeed06168ab556ee3, 0x2536f9398906f3ee, 0xc2e5da72d768e7c7, 0xfe4220ccfa128462, 0x13fc9b8c641292a1, 0xfddc2a8e39e59c5e, 0x80c097df71b8df59, 0x1a89e393ab1ce506,
    0x83a49464b908eb1c, 0x6927dab06aeed41d, 0x230eafe78ebf3d8c, 0xb908f437556cc6a7, 0x71ca8575869f171f, 0x55460b3795f00add, 0x12a8e23c8307db78, 0xb5ce54e627075f69,
    0x882bfaf25ba0a545, 0x63ccf2ede4d879d3, 0x3dd0930e39dabc39, 0xe57819410c04bad2, 0x44d5980065a73220, 0x5bd4cf988a4e51c1, 0x3831800f4fc7e0e2, 0x9af412fc3a3c440f,
    0x2519692a217eec09, 0x6eba1cba34c05d72, 0xe0b8866bc3230d22, 0xbdbb4d6e5d2ecee6, 0x3b702330c4f48e0e, 0x0000000308dcbe81, 0xbd7d9f4a7436dbd1, 0xd9273ff3f3c1749e,
    0xd7420e15b537e698, 0x7c426ab05e02aac1, 0x255b2757d096508e, 0x0f6b9749c2aa7ed9, 0xfd7222a056382f24, 0xb0178ddcfd8fafcd, 0x08bf891ce3b36194, 0x5a34a5cc4fbb7d38,
    0x524f105bd44ea4a8, 0xb64bbbb6d3566cac, 0x699e7faf1d276afe, 0x56778957268622fd, 0xaa4e24021f866e0b, 0x8ec2761ea069f21c, 0xe65795ebb97276f4, 0x697c1a97929bd916,
    0xf3356016683e1b18, 0xf8109fc5d6c561ee, 0xb0418bbca20fa61c, 0x8754c2b2196bbc69, 0x69061377873ddea1, 0x3f26fce449d4d2a4, 0xaad542b8d67d38e4, 0xd53384aed50e97f3,
    0x7583aa2b05081826, 0x4fc40963039b0759, 0x83defb7c4d3b1136, 0x4067562132b2c77e, 0xe6470d27f343521d, 0x6ba0c393cc48a7c7, 0xb1f362bf2f82f8f0, 0x30fc9d2211e1af2c,
    0xfeeb2080f448eaa4, 0x5ce6472716d259f4, 0x7e97b34499e14c63, 0x86100cef5dc9763a, 0x00000006f966d57b, 0x946cac4bbf91774d, 0xa29f5a486703e1bb, 0x1b8105d3a3623a3f,
    0xaf4244db9b7cc7ac, 0x0dc42ad76d5168a5, 0x24deff541f973fb4, 0xf1f4629fcab3a723, 0x558d6709d94e33d4, 0xf2ee894a3ae7059f, 0x384d602db709107f, 0xba0f5d78dc918539,
    0xc0f01147bfe08176, 0x046549152829e9d1, 0x0f3f1f8caa64c4b2, 0xcf1c9e4d5bdba88c, 0xc7a54b9580852736, 0x5cc8839399506242, 0x891c552e85cf4193, 0x1971a868ee38ee89,
    0x607f5122e7aee447, 0x9351a32461b8f124, 0x38250dd85424764d, 0x8b3bc76f8e385a78, 0xe9d3dd9df00f2081, 0x43a9034450a6cf48, 0x5e6f2bc78a2aadd8, 0x39986f4e8ba979a7,
    0x9160e0a65bf504de, 0xa79707c020e81db0, 0x89761d10cd7fd644, 0x27043a71fb25378d, 0xa751b9353e7fd3d9, 0xf7eed5429f7f1e3e, 0x181ccad8835c1202, 0x72ac5044b583af7a,
    0x06f75c76167da00e, 0x0208834aa303426a, 0x26b9daaf18242f91, 0x9f2c0f0711e4fee3, 0x0000000000012b73, 0x92bcfdd95f15cb17, 0x4545c070d8ab6663, 0x84a42ede652e9c9a,
    0x4db22d3ed2ee7b0e, 0xa477800de9eff080, 0x32b56a72acd65884, 0xb59fc44cc19d13a0, 0xeb08fdd4a4905716, 0xedf922bfe2d161cc, 0x8080a405543d80c0, 0x1b159f3d3e41470e,
    0xac6924dd7f13d9ad, 0xe2ec2a07a86f878c, 0x0edce76d21beeeef, 0xddfa76a03d46e8a1, 0x117f3f3c31f1efe0, 0x7dae3ed8b38ff4d3, 0x36505237cfdcd44d, 0xd2e0e108f81b190d,
    0xe5ab21e3cd2a8ec0, 0xaa9b56e1f578b9a2, 0x8d4337005c74176e, 0xd36021c212eb62a2, 0x78c0701dfe4a42e1, 0x51d66a671fffcc79, 0x98699b1726e74a1b, 0x749c31432bc7d6c2,
    0xfed499bafedde79f, 0x9011ece8b29a9604, 0x1ff0b7ae45b33b6b, 0x3f1cb362fd9f6f43, 0xfbfe00209f96f7c1, 0x742fc4b3bef41028, 0x922939891d2db044, 0x2520f2e3367446c4,
    0x80f46e0ee477dcf5, 0xf3a5459865c7969c, 0x51a6740db07a8dc9, 0x2521ee910760c8be, 0x0ed19893456797c5, 0xc2112c3e9ebdc476, 0xcc03a94dc18a9040, 0x65d0ab26944ad46e,
    0xa24dc5094910a005, 0xfe8d9a5bece7050d, 0x72ef2db7ff2f5d81, 0x8e070b03ef90ff44, 0x3d54720ef99af8ee, 0x1a714d81b0977689, 0x89898dfba1fceb7e, 0x27908eaac04e3733,
    0x406f4ba449adf302, 0xeb2969ef6ade109a, 0xce2077f85578c0f4, 0x0ad105af56a3fe30, 0xa5d49dfa35dab2c0, 0xc51fbb61a2d68c82, 0xf44e37baa3797a2f, 0x8f38c8812893640c,
    0xcc50e4b9bccdcb98, 0x2a7cf3582c991a99, 0xd69a970110015dc9, 0xf794490976ab9e23, 0xd1e536798842add0, 0xf70892f550f8778f, 0x754d026c9351ce9d, 0x2e3a0a6c166fd067,
    0x4f4486a80f73eb07, 0xe0f68444727a7f37, 0x071c45e497e9e3ed, 0x391b1d2adc9c5b3b, 0xb39a68d87102aad0, 0x8c335cd574623817, 0xcc8e5f2f81db4546, 0x9352d0eb0fc9e65c,
    0x95b28d46b256e2e4, 0xb8a6932b01caca29, 0xdd576c3ffaf97183, 0x00000000000008b3, 0x813deee790e400e3, 0xb99111d493756cd5, 0x20a5319bf0a1a1a3, 0x4273149912a8bd1c,
    0x63e3213fc6b07972, 0xac44782a2510d127, 0xf7eba349726d57fc, 0xbfbf0e46062fa2e2, 0x92b64b64836cc706, 0x8bd9f781217b3967, 0xc3129f1f4f75c16f, 0x62a896ee2c5f2529,
    0xa8f06cb2602419e7, 0x92624e574b7aaff7, 0xc4763e3af11bca7d, 0xdae655f11c865db4, 0x676f4c6f1b491ea3, 0xa3b2bc872e98476b, 0xe80d4dd79d9d95b5, 0x370749417de77af1,
    0x6559a952d0db4930, 0x7bc6091a4077a0d5, 0xa302fc2c4f26f815, 0x4dd7d5d16ccf72e5, 0x74a99214fdb9d89d, 0xa1488c7242a3ec0c, 0x7cf145297e522da6, 0xef8026fff42de066,
    0xbb071de6cd503fb6, 0xa828d545be619ceb, 0x8b7def31e08d1765, 0x86fe5ae1005f2623, 0x273042e3149c8fbb, 0xa3cc87bca123a6e8, 0x11feca25e6b85de6, 0xa61264621ba76a8c,
    0x4516268c9c4ee693, 0xccaa3ca56e801083, 0x7b0ec4a6023f665a, 0x00000000545a4a6c, 0x8f9f8dff333d6401, 0xc777e0927a30cd91, 0x28dddd2860c61eee, 0x2c7565db4a7e4304,
    0x92457ba4988f5b62, 0x6c95df4a06df5183, 0xf30d4198985b96db, 0xb4df38efc45350f5, 0xc37017c92e9cc867, 0xb36b7675ac8b27cd, 0x49f46b0c89a01c37, 0x231fba1cc2f2f4d4,
    0x01636f90f75f87e3, 0x9aaa5f6bf422aa85, 0xa710755a2ec7ae3a, 0xdb519d9dafed368c, 0x8ce29ff926c80116, 0xe17e9d6167706353, 0x6ad68c62a1afecb8, 0x2423e039a6d3f38d,
    0x413a6ab2439471bd, 0xaf366619aba3b304, 0x04f0920e6349d14c, 0xbccb8e02ae599d12, 0xea802153aba894d9, 0x9a8a37aeb39ea04b, 0x9efe5a3ae0e68f48, 0x5cbd14f2b781b5d1,
    0xa44fc8425eae3532, 0x4a9f3076f78af1b1, 0x1a7b48a1de85e7bc, 0x6ab8e96dcafd348a, 0xd08d7daa3f66ac54, 0x45184c00adec517b, 0xbd671b048e01fd85, 0x5c859f357367d856,
    0x6194e86607e53aa4, 0x4627c3bfb97786ac, 0xdbb2d45c284dd209, 0x000000c205cfa3dc,
];

pub(crate) static DEN_SEGMENTS: &[u64] = &[
    0x0000000000000006, 0x000000000000001e, 0x000000000000002a, 0x000000000000001e, 0x0000000000000042, 0x0000000000000aaa, 0x0000000000000006, 0x00000000000001fe,
    0x000000000000031e, 0x000000000000014a, 0x000000000000008a, 0x0000000000000aaa, 0x0000000000000006, 0x0000000000000366, 0x00000000000037f2, 0x00000000000001fe,
    0x0000000000000006, 0x00000000001d48d6, 0x0000000000000006, 0x00000000000034da, 0x000000000000070e, 0x00000000000002b2, 0x000000000000011a, 0x000000000000b54a,
    0x0000000000000042, 0x0000000000000636, 0x000000000000031e, 0x0000000000000366, 0x0000000000000162, 0x0000000003627f2a, 0x0000000000000006, 0x00000000000001fe,
    0x000000000000fcd2, 0x000000000000001e, 0x000000000000124e, 0x000000000859c506, 0x0000000000000006, 0x000000000000001e, 0x0000000000000cf6, 0x000000000003827a,
    0x00000000000001f2, 0x000000000033f216, 0x0000000000000006, 0x000000000000efe2, 0x00000000000426f6, 0x0000000000000582, 0x0000000000000006, 0x000000000044b10a,
    0x0000000000000006, 0x0000000000008232, 0x00000000000010e6, 0x0000000000000636, 0x0000000000000282, 0x000000000c78031e, 0x00000000000005ee, 0x0000000000198066,
    0x000000000000002a, 0x00000000000006ea, 0x0000000000000006, 0x000000008ac65dba, 0x0000000000000006, 0x000000000000001e, 0x0000000000427ef6, 0x00000000000001fe,
    0x00000000000021c6, 0x0000000000403152, 0x0000000000000006, 0x000000000000100e, 0x0000000000042fd2, 0x00000000000a5e2e, 0x0000000000000006, 0x000000008df61566,
    0x0000000000000006, 0x0000000000001176, 0x000000000020ffbe, 0x000000000000001e, 0x000000000000008a, 0x000000006af74576, 0x0000000000000006, 0x000000000003827a,
    0x000000000001fc1a, 0x00000000000009ba, 0x00000000000003ea, 0x000000000033f216, 0x0000000000000042, 0x0000000000001446, 0x00000000000009ae, 0x00000000000fee02,
    0x0000000000000432, 0x000006925e1c00ce, 0x0000000000000006, 0x0000000000000582, 0x000000000000002a, 0x000000000000001e, 0x000000000000313e, 0x0000000033c9788a,
    0x0000000000000006, 0x0000000000029d7e, 0x000000000e96099a, 0x000000000014da02, 0x0000000000000006, 0x0000000000044a66, 0x0000000000000006, 0x0000000000006996,
    0x0000000225e96b3e, 0x0000000000000c8a, 0x0000000000000006, 0x000000038e38e38e, 0x0000000000000006, 0x0000000000001da6, 0x0000000000002496, 0x0000000000198066,
    0x0000000000000552, 0x0000000000098a12, 0x0000000000000c1e, 0x0000000000064afa, 0x000000000000f642, 0x000000000000001e, 0x000000000000059a, 0x000008acf0a1fdba,
    0x000000000000008a, 0x000000000000001e, 0x0000000000000d9e, 0x000000000000001e, 0x00000000000040b6, 0x00000046c43f6a96, 0x0000000000000006, 0x000000000001fffe,
    0x000000000000002a, 0x000000000022f5f6, 0x000000000000062a, 0x0000000016512582, 0x0000000000000006, 0x0000000000001f86, 0x0000000004653e6a, 0x00000000000110ee,
    0x0000000000000006, 0x0000000126774cba, 0x0000000000000006, 0x00000001d298742e, 0x0000000000002e6e, 0x000000000000001e, 0x000000000000008a, 0x00000035ca3e1ba6,
    0x0000000000000f36, 0x0000000000002256, 0x000000000000070e, 0x0000000000001176, 0x0000000000000006, 0x000000c9a4ddb31e, 0x0000000000000006, 0x00000000000001fe,
    0x0000000001810896, 0x0000000000004e2a, 0x000000000000502e, 0x00000082c853ed46, 0x0000000000000006, 0x0000000000002526, 0x000000000000118e, 0x000000000003827a,
    0x000000000000011a, 0x00000007f069fc1a, 0x0000000000000006, 0x00000000000009ba, 0x00000001b36d117e, 0x0000000000001392, 0x0000000000000006, 0x000002012101e3f6,
    0x0000000000000006, 0x000000000000014a, 0x000000000000031e, 0x0000000000001446, 0x0000000000000822, 0x000000000359bfb6, 0x000000000000124e, 0x0000000015f730c2,
    0x000000000000002a, 0x00000000000014fa, 0x000000000000086a, 0x004cd53e4565686e, 0x0000000000000006, 0x000000000000b41e, 0x0000000000003c36, 0x0000000000005da2,
    0x0000000000000042, 0x00000000000f89b2, 0x000000000000008a, 0x000000000000001e, 0x000000006271f632, 0x000000000000f636, 0x00000000000008fa, 0x0000000033c9788a,
    0x0000000000000006, 0x0000000000002d96, 0x0000000008d5a20a, 0x0000000000029d7e, 0x0000000000000006, 0x0000d480ae3843da, 0x0000000000000006, 0x000000022b414f42,
    0x000000000000002a, 0x000000000000001e, 0x0000000000000162, 0x00000003ab203fa6, 0x0000000000001566, 0x000000000000001e, 0x00000000004f8c96, 0x0000000000006996,
    0x000000000000e1de, 0x0632b4b27b7f5966, 0x0000000000000006, 0x0000000000000c8a, 0x000000000000002a, 0x000000000000001e, 0x0000000000006f1e, 0x0000663c71c7160e,
    0x0000000000000006, 0x000000000000001e, 0x0000000000004806, 0x0000000001a69b26, 0x0000000000000a62, 0x0000000005681ece, 0x0000000000000006, 0x000000002cba32e6,
    0x000000000272fb1a, 0x0000000000001a9a, 0x0000000000000006, 0x0000000011077a22, 0x0000000000000006, 0x00000000006d1a1e, 0x000000004ccdb79a, 0x00000000006afa9a,
    0x0000000000000af2, 0x00000125bd07bf0a, 0x0000000000000042, 0x000000000000001e, 0x000000000000002a, 0x0000000000032c3a, 0x0000000000000b3a, 0x000349872d61237a,
    0x0000000000000006, 0x00000000000002b2, 0x0000000003c69576, 0x000000000000001e, 0x0000000000231b9a, 0x000000000003751e, 0x0000000000000006, 0x00000000000001fe,
    0x00000000003567d2, 0x00000000007fa706, 0x0000000000000bca, 0x0000142df61564c6, 0x0000000000001956, 0x0000000000003ba6, 0x000000000016825e, 0x000000000001fffe,
];

pub(crate) static NUM_INDEX: &[TableSlice] = &[
    TableSlice { offset: 0, len: 1, neg: false },
    TableSlice { offset: 1, len: 1, neg: true },
    TableSlice { offset: 2, len: 1, neg: false },
    TableSlice { offset: 3, len: 1, neg: true },
    TableSlice { offset: 4, len: 1, neg: false },
    TableSlice { offset: 5, len: 1, neg: true },
    TableSlice { offset: 6, len: 1, neg: false },
    TableSlice { offset: 7, len: 1, neg: true },
    TableSlice { offset: 8, len: 1, neg: false },
    TableSlice { offset: 9, len: 1, neg: true },
    TableSlice { offset: 10, len: 1, neg: false },
    TableSlice { offset: 11, len: 1, neg: true },
    TableSlice { offset: 12, len: 1, neg: false },
    TableSlice { offset: 13, len: 1, neg: true },
    TableSlice { offset: 14, len: 1, neg: false },
    TableSlice { offset: 15, len: 1, neg: true },
    TableSlice { offset: 16, len: 1, neg: false },
    TableSlice { offset: 17, len: 2, neg: true },
    TableSlice { offset: 19, len: 1, neg: false },
    TableSlice { offset: 20, len: 2, neg: true },
    TableSlice { offset: 22, len: 2, neg: false },
    TableSlice { offset: 24, len: 2, neg: true },
    TableSlice { offset: 26, len: 2, neg: false },
    TableSlice { offset: 28, len: 2, neg: true },
    TableSlice { offset: 30, len: 2, neg: false },
    TableSlice { offset: 32, len: 2, neg: true },
    TableSlice { offset: 34, len: 2, neg: false },
    TableSlice { offset: 36, len: 2, neg: true },
    TableSlice { offset: 38, len: 2, neg: false },
    TableSlice { offset: 40, len: 3, neg: true },
    TableSlice { offset: 43, len: 2, neg: false },
    TableSlice { offset: 45, len: 3, neg: true },
    TableSlice { offset: 48, len: 3, neg: false },
    TableSlice { offset: 51, len: 3, neg: true },
    TableSlice { offset: 54, len: 3, neg: false },
    TableSlice { offset: 57, len: 3, neg: true },
    TableSlice { offset: 60, len: 3, neg: false },
    TableSlice { offset: 63, len: 3, neg: true },
    TableSlice { offset: 66, len: 3, neg: false },
    TableSlice { offset: 69, len: 4, neg: true },
    TableSlice { offset: 73, len: 4, neg: false },
    TableSlice { offset: 77, len: 4, neg: true },
    TableSlice { offset: 81, len: 4, neg: false },
    TableSlice { offset: 85, len: 4, neg: true },
    TableSlice { offset: 89, len: 4, neg: false },
    TableSlice { offset: 93, len: 4, neg: true },
    TableSlice { offset: 97, len: 4, neg: false },
    TableSlice { offset: 101, len: 5, neg: true },
    TableSlice { offset: 106, len: 4, neg: false },
    TableSlice { offset: 110, len: 5, neg: true },
    TableSlice { offset: 115, len: 5, neg: false },
    TableSlice { offset: 120, len: 5, neg: true },
    TableSlice { offset: 125, len: 5, neg: false },
    TableSlice { offset: 130, len: 6, neg: true },
    TableSlice { offset: 136, len: 5, neg: false },
    TableSlice { offset: 141, len: 6, neg: true },
    TableSlice { offset: 147, len: 6, neg: false },
    TableSlice { offset: 153, len: 6, neg: true },
    TableSlice { offset: 159, len: 6, neg: false },
    TableSlice { offset: 165, len: 6, neg: true },
    TableSlice { offset: 171, len: 6, neg: false },
    TableSlice { offset: 177, len: 6, neg: true },
    TableSlice { offset: 183, len: 7, neg: false },
    TableSlice { offset: 190, len: 7, neg: true },
    TableSlice { offset: 197, len: 7, neg: false },
    TableSlice { offset: 204, len: 7, neg: true },
    TableSlice { offset: 211, len: 7, neg: false },
    TableSlice { offset: 218, len: 7, neg: true },
    TableSlice { offset: 225, len: 7, neg: false },
    TableSlice { offset: 232, len: 8, neg: true },
    TableSlice { offset: 240, len: 7, neg: false },
    TableSlice { offset: 247, len: 8, neg: true },
    TableSlice { offset: 255, len: 8, neg: false },
    TableSlice { offset: 263, len: 8, neg: true },
    TableSlice { offset: 271, len: 8, neg: false },
    TableSlice { offset: 279, len: 8, neg: true },
    TableSlice { offset: 287, len: 8, neg: false },
    TableSlice { offset: 295, len: 9, neg: true },
    TableSlice { offset: 304, len: 9, neg: false },
    TableSlice { offset: 313, len: 9, neg: true },
    TableSlice { offset: 322, len: 9, neg: false },
    TableSlice { offset: 331, len: 9, neg: true },
    TableSlice { offset: 340, len: 9, neg: false },
    TableSlice { offset: 349, len: 10, neg: true },
    TableSlice { offset: 359, len: 9, neg: false },
    TableSlice { offset: 368, len: 10, neg: true },
    TableSlice { offset: 378, len: 10, neg: false },
    TableSlice { offset: 388, len: 10, neg: true },
    TableSlice { offset: 398, len: 10, neg: false },
    TableSlice { offset: 408, len: 11, neg: true },
    TableSlice { offset: 419, len: 10, neg: false },
    TableSlice { offset: 429, len: 11, neg: true },
    TableSlice { offset: 440, len: 11, neg: false },
    TableSlice { offset: 451, len: 11, neg: true },
    TableSlice { offset: 462, len: 11, neg: false },
    TableSlice { offset: 473, len: 12, neg: true },
    TableSlice { offset: 485, len: 11, neg: false },
    TableSlice { offset: 496, len: 12, neg: true },
    TableSlice { offset: 508, len: 12, neg: false },
    TableSlice { offset: 520, len: 12, neg: true },
    TableSlice { offset: 532, len: 12, neg: false },
    TableSlice { offset: 544, len: 12, neg: true },
    TableSlice { offset: 556, len: 12, neg: false },
    TableSlice { offset: 568, len: 13, neg: true },
    TableSlice { offset: 581, len: 13, neg: false },
    TableSlice { offset: 594, len: 13, neg: true },
    TableSlice { offset: 607, len: 13, neg: false },
    TableSlice { offset: 620, len: 13, neg: true },
    TableSlice { offset: 633, len: 13, neg: false },
    TableSlice { offset: 646, len: 13, neg: true },
    TableSlice { offset: 659, len: 14, neg: false },
    TableSlice { offset: 673, len: 14, neg: true },
    TableSlice { offset: 687, len: 14, neg: false },
    TableSlice { offset: 701, len: 14, neg: true },
    TableSlice { offset: 715, len: 14, neg: false },
    TableSlice { offset: 729, len: 15, neg: true },
    TableSlice { offset: 744, len: 15, neg: false },
    TableSlice { offset: 759, len: 15, neg: true },
    TableSlice { offset: 774, len: 15, neg: false },
    TableSlice { offset: 789, len: 16, neg: true },
    TableSlice { offset: 805, len: 15, neg: false },
    TableSlice { offset: 820, len: 15, neg: true },
    TableSlice { offset: 835, len: 16, neg: false },
    TableSlice { offset: 851, len: 16, neg: true },
    TableSlice { offset: 867, len: 16, neg: false },
    TableSlice { offset: 883, len: 16, neg: true },
    TableSlice { offset: 899, len: 16, neg: false },
    TableSlice { offset: 915, len: 16, neg: true },
    TableSlice { offset: 931, len: 16, neg: false },
    TableSlice { offset: 947, len: 17, neg: true },
    TableSlice { offset: 964, len: 17, neg: false },
    TableSlice { offset: 981, len: 17, neg: true },
    TableSlice { offset: 998, len: 17, neg: false },
    TableSlice { offset: 1015, len: 17, neg: true },
    TableSlice { offset: 1032, len: 18, neg: false },
    TableSlice { offset: 1050, len: 18, neg: true },
    TableSlice { offset: 1068, len: 18, neg: false },
    TableSlice { offset: 1086, len: 18, neg: true },
    TableSlice { offset: 1104, len: 18, neg: false },
    TableSlice { offset: 1122, len: 19, neg: true },
    TableSlice { offset: 1141, len: 19, neg: false },
    TableSlice { offset: 1160, len: 19, neg: true },
    TableSlice { offset: 1179, len: 19, neg: false },
    TableSlice { offset: 1198, len: 20, neg: true },
    TableSlice { offset: 1218, len: 19, neg: false },
    TableSlice { offset: 1237, len: 19, neg: true },
    TableSlice { offset: 1256, len: 20, neg: false },
    TableSlice { offset: 1276, len: 20, neg: true },
    TableSlice { offset: 1296, len: 20, neg: false },
    TableSlice { offset: 1316, len: 21, neg: true },
    TableSlice { offset: 1337, len: 20, neg: false },
    TableSlice { offset: 1357, len: 20, neg: true },
    TableSlice { offset: 1377, len: 21, neg: false },
    TableSlice { offset: 1398, len: 21, neg: true },
    TableSlice { offset: 1419, len: 21, neg: false },
    TableSlice { offset: 1440, len: 22, neg: true },
    TableSlice { offset: 1462, len: 21, neg: false },
    TableSlice { offset: 1483, len: 22, neg: true },
    TableSlice { offset: 1505, len: 22, neg: false },
    TableSlice { offset: 1527, len: 22, neg: true },
    TableSlice { offset: 1549, len: 22, neg: false },
    TableSlice { offset: 1571, len: 23, neg: true },
    TableSlice { offset: 1594, len: 22, neg: false },
    TableSlice { offset: 1616, len: 23, neg: true },
    TableSlice { offset: 1639, len: 23, neg: false },
    TableSlice { offset: 1662, len: 23, neg: true },
    TableSlice { offset: 1685, len: 23, neg: false },
    TableSlice { offset: 1708, len: 24, neg: true },
    TableSlice { offset: 1732, len: 23, neg: false },
    TableSlice { offset: 1755, len: 24, neg: true },
    TableSlice { offset: 1779, len: 24, neg: false },
    TableSlice { offset: 1803, len: 24, neg: true },
    TableSlice { offset: 1827, len: 24, neg: false },
    TableSlice { offset: 1851, len: 25, neg: true },
    TableSlice { offset: 1876, len: 25, neg: false },
    TableSlice { offset: 1901, len: 25, neg: true },
    TableSlice { offset: 1926, len: 25, neg: false },
    TableSlice { offset: 1951, len: 25, neg: true },
    TableSlice { offset: 1976, len: 25, neg: false },
    TableSlice { offset: 2001, len: 26, neg: true },
    TableSlice { offset: 2027, len: 26, neg: false },
    TableSlice { offset: 2053, len: 26, neg: true },
    TableSlice { offset: 2079, len: 26, neg: false },
    TableSlice { offset: 2105, len: 26, neg: true },
    TableSlice { offset: 2131, len: 26, neg: false },
    TableSlice { offset: 2157, len: 27, neg: true },
    TableSlice { offset: 2184, len: 27, neg: false },
    TableSlice { offset: 2211, len: 27, neg: true },
    TableSlice { offset: 2238, len: 27, neg: false },
    TableSlice { offset: 2265, len: 27, neg: true },
    TableSlice { offset: 2292, len: 28, neg: false },
    TableSlice { offset: 2320, len: 28, neg: true },
    TableSlice { offset: 2348, len: 28, neg: false },
    TableSlice { offset: 2376, len: 28, neg: true },
    TableSlice { offset: 2404, len: 29, neg: false },
    TableSlice { offset: 2433, len: 29, neg: true },
    TableSlice { offset: 2462, len: 29, neg: false },
    TableSlice { offset: 2491, len: 29, neg: true },
    TableSlice { offset: 2520, len: 29, neg: false },
    TableSlice { offset: 2549, len: 30, neg: true },
    TableSlice { offset: 2579, len: 29, neg: false },
    TableSlice { offset: 2608, len: 29, neg: true },
    TableSlice { offset: 2637, len: 30, neg: false },
    TableSlice { offset: 2667, len: 30, neg: true },
    TableSlice { offset: 2697, len: 30, neg: false },
    TableSlice { offset: 2727, len: 30, neg: true },
    TableSlice { offset: 2757, len: 31, neg: false },
    TableSlice { offset: 2788, len: 31, neg: true },
    TableSlice { offset: 2819, len: 31, neg: false },
    TableSlice { offset: 2850, len: 32, neg: true },
    TableSlice { offset: 2882, len: 31, neg: false },
    TableSlice { offset: 2913, len: 31, neg: true },
    TableSlice { offset: 2944, len: 32, neg: false },
    TableSlice { offset: 2976, len: 32, neg: true },
    TableSlice { offset: 3008, len: 32, neg: false },
    TableSlice { offset: 3040, len: 33, neg: true },
    TableSlice { offset: 3073, len: 32, neg: false },
    TableSlice { offset: 3105, len: 33, neg: true },
    TableSlice { offset: 3138, len: 33, neg: false },
    TableSlice { offset: 3171, len: 33, neg: true },
    TableSlice { offset: 3204, len: 33, neg: false },
    TableSlice { offset: 3237, len: 34, neg: true },
    TableSlice { offset: 3271, len: 33, neg: false },
    TableSlice { offset: 3304, len: 34, neg: true },
    TableSlice { offset: 3338, len: 34, neg: false },
    TableSlice { offset: 3372, len: 34, neg: true },
    TableSlice { offset: 3406, len: 34, neg: false },
    TableSlice { offset: 3440, len: 35, neg: true },
    TableSlice { offset: 3475, len: 35, neg: false },
    TableSlice { offset: 3510, len: 35, neg: true },
    TableSlice { offset: 3545, len: 35, neg: false },
    TableSlice { offset: 3580, len: 35, neg: true },
    TableSlice { offset: 3615, len: 36, neg: false },
    TableSlice { offset: 3651, len: 36, neg: true },
    TableSlice { offset: 3687, len: 36, neg: false },
    TableSlice { offset: 3723, len: 36, neg: true },
    TableSlice { offset: 3759, len: 36, neg: false },
    TableSlice { offset: 3795, len: 37, neg: true },
    TableSlice { offset: 3832, len: 37, neg: false },
    TableSlice { offset: 3869, len: 37, neg: true },
    TableSlice { offset: 3906, len: 37, neg: false },
    TableSlice { offset: 3943, len: 37, neg: true },
    TableSlice { offset: 3980, len: 38, neg: false },
    TableSlice { offset: 4018, len: 38, neg: true },
    TableSlice { offset: 4056, len: 38, neg: false },
    TableSlice { offset: 4094, len: 38, neg: true },
    TableSlice { offset: 4132, len: 38, neg: false },
    TableSlice { offset: 4170, len: 38, neg: true },
    TableSlice { offset: 4208, len: 39, neg: false },
    TableSlice { offset: 4247, len: 39, neg: true },
    TableSlice { offset: 4286, len: 39, neg: false },
    TableSlice { offset: 4325, len: 40, neg: true },
    TableSlice { offset: 4365, len: 39, neg: false },
    TableSlice { offset: 4404, len: 40, neg: true },
    TableSlice { offset: 4444, len: 40, neg: false },
    TableSlice { offset: 4484, len: 40, neg: true },
];

pub(crate) static DEN_INDEX: &[TableSlice] = &[
    TableSlice { offset: 0, len: 1, neg: false },
    TableSlice { offset: 1, len: 1, neg: false },
    TableSlice { offset: 2, len: 1, neg: false },
    TableSlice { offset: 3, len: 1, neg: false },
    TableSlice { offset: 4, len: 1, neg: false },
    TableSlice { offset: 5, len: 1, neg: false },
    TableSlice { offset: 6, len: 1, neg: false },
    TableSlice { offset: 7, len: 1, neg: false },
    TableSlice { offset: 8, len: 1, neg: false },
    TableSlice { offset: 9, len: 1, neg: false },
    TableSlice { offset: 10, len: 1, neg: false },
    TableSlice { offset: 11, len: 1, neg: false },
    TableSlice { offset: 12, len: 1, neg: false },
    TableSlice { offset: 13, len: 1, neg: false },
    TableSlice { offset: 14, len: 1, neg: false },
    TableSlice { offset: 15, len: 1, neg: false },
    TableSlice { offset: 16, len: 1, neg: false },
    TableSlice { offset: 17, len: 1, neg: false },
    TableSlice { offset: 18, len: 1, neg: false },
    TableSlice { offset: 19, len: 1, neg: false },
    TableSlice { offset: 20, len: 1, neg: false },
    TableSlice { offset: 21, len: 1, neg: false },
    TableSlice { offset: 22, len: 1, neg: false },
    TableSlice { offset: 23, len: 1, neg: false },
    TableSlice { offset: 24, len: 1, neg: false },
    TableSlice { offset: 25, len: 1, neg: false },
    TableSlice { offset: 26, len: 1, neg: false },
    TableSlice { offset: 27, len: 1, neg: false },
    TableSlice { offset: 28, len: 1, neg: false },
    TableSlice { offset: 29, len: 1, neg: false },
    TableSlice { offset: 30, len: 1, neg: false },
    TableSlice { offset: 31, len: 1, neg: false },
    TableSlice { offset: 32, len: 1, neg: false },
    TableSlice { offset: 33, len: 1, neg: false },
    TableSlice { offset: 34, len: 1, neg: false },
    TableSlice { offset: 35, len: 1, neg: false },
    TableSlice { offset: 36, len: 1, neg: false },
    TableSlice { offset: 37, len: 1, neg: false },
    TableSlice { offset: 38, len: 1, neg: false },
    TableSlice { offset: 39, len: 1, neg: false },
    TableSlice { offset: 40, len: 1, neg: false },
    TableSlice { offset: 41, len: 1, neg: false },
    TableSlice { offset: 42, len: 1, neg: false },
    TableSlice { offset: 43, len: 1, neg: false },
    TableSlice { offset: 44, len: 1, neg: false },
    TableSlice { offset: 45, len: 1, neg: false },
    TableSlice { offset: 46, len: 1, neg: false },
    TableSlice { offset: 47, len: 1, neg: false },
    TableSlice { offset: 48, len: 1, neg: false },
    TableSlice { offset: 49, len: 1, neg: false },
    TableSlice { offset: 50, len: 1, neg: false },
    TableSlice { offset: 51, len: 1, neg: false },
    TableSlice { offset: 52, len: 1, neg: false },
    TableSlice { offset: 53, len: 1, neg: false },
    TableSlice { offset: 54, len: 1, neg: false },
    TableSlice { offset: 55, len: 1, neg: false },
    TableSlice { offset: 56, len: 1, neg: false },
    TableSlice { offset: 57, len: 1, neg: false },
    TableSlice { offset: 58, len: 1, neg: false },
    TableSlice { offset: 59, len: 1, neg: false },
    TableSlice { offset: 60, len: 1, neg: false },
    TableSlice { offset: 61, len: 1, neg: false },
    TableSlice { offset: 62, len: 1, neg: false },
    TableSlice { offset: 63, len: 1, neg: false },
    TableSlice { offset: 64, len: 1, neg: false },
    TableSlice { offset: 65, len: 1, neg: false },
    TableSlice { offset: 66, len: 1, neg: false },
    TableSlice { offset: 67, len: 1, neg: false },
    TableSlice { offset: 68, len: 1, neg: false },
    TableSlice { offset: 69, len: 1, neg: false },
    TableSlice { offset: 70, len: 1, neg: false },
    TableSlice { offset: 71, len: 1, neg: false },
    TableSlice { offset: 72, len: 1, neg: false },
    TableSlice { offset: 73, len: 1, neg: false },
    TableSlice { offset: 74, len: 1, neg: false },
    TableSlice { offset: 75, len: 1, neg: false },
    TableSlice { offset: 76, len: 1, neg: false },
    TableSlice { offset: 77, len: 1, neg: false },
    TableSlice { offset: 78, len: 1, neg: false },
    TableSlice { offset: 79, len: 1, neg: false },
    TableSlice { offset: 80, len: 1, neg: false },
    TableSlice { offset: 81, len: 1, neg: false },
    TableSlice { offset: 82, len: 1, neg: false },
    TableSlice { offset: 83, len: 1, neg: false },
    TableSlice { offset: 84, len: 1, neg: false },
    TableSlice { offset: 85, len: 1, neg: false },
    TableSlice { offset: 86, len: 1, neg: false },
    TableSlice { offset: 87, len: 1, neg: false },
    TableSlice { offset: 88, len: 1, neg: false },
    TableSlice { offset: 89, len: 1, neg: false },
    TableSlice { offset: 90, len: 1, neg: false },
    TableSlice { offset: 91, len: 1, neg: false },
    TableSlice { offset: 92, len: 1, neg: false },
    TableSlice { offset: 93, len: 1, neg: false },
    TableSlice { offset: 94, len: 1, neg: false },
    TableSlice { offset: 95, len: 1, neg: false },
    TableSlice { offset: 96, len: 1, neg: false },
    TableSlice { offset: 97, len: 1, neg: false },
    TableSlice { offset: 98, len: 1, neg: false },
    TableSlice { offset: 99, len: 1, neg: false },
    TableSlice { offset: 100, len: 1, neg: false },
    TableSlice { offset: 101, len: 1, neg: false },
    TableSlice { offset: 102, len: 1, neg: false },
    TableSlice { offset: 103, len: 1, neg: false },
    TableSlice { offset: 104, len: 1, neg: false },
    TableSlice { offset: 105, len: 1, neg: false },
    TableSlice { offset: 106, len: 1, neg: false },
    TableSlice { offset: 107, len: 1, neg: false },
    TableSlice { offset: 108, len: 1, neg: false },
    TableSlice { offset: 109, len: 1, neg: false },
    TableSlice { offset: 110, len: 1, neg: false },
    TableSlice { offset: 111, len: 1, neg: false },
    TableSlice { offset: 112, len: 1, neg: false },
    TableSlice { offset: 113, len: 1, neg: false },
    TableSlice { offset: 114, len: 1, neg: false },
    TableSlice { offset: 115, len: 1, neg: false },
    TableSlice { offset: 116, len: 1, neg: false },
    TableSlice { offset: 117, len: 1, neg: false },
    TableSlice { offset: 118, len: 1, neg: false },
    TableSlice { offset: 119, len: 1, neg: false },
    TableSlice { offset: 120, len: 1, neg: false },
    TableSlice { offset: 121, len: 1, neg: false },
    TableSlice { offset: 122, len: 1, neg: false },
    TableSlice { offset: 123, len: 1, neg: false },
    TableSlice { offset: 124, len: 1, neg: false },
    TableSlice { offset: 125, len: 1, neg: false },
    TableSlice { offset: 126, len: 1, neg: false },
    TableSlice { offset: 127, len: 1, neg: false },
    TableSlice { offset: 128, len: 1, neg: false },
    TableSlice { offset: 129, len: 1, neg: false },
    TableSlice { offset: 130, len: 1, neg: false },
    TableSlice { offset: 131, len: 1, neg: false },
    TableSlice { offset: 132, len: 1, neg: false },
    TableSlice { offset: 133, len: 1, neg: false },
    TableSlice { offset: 134, len: 1, neg: false },
    TableSlice { offset: 135, len: 1, neg: false },
    TableSlice { offset: 136, len: 1, neg: false },
    TableSlice { offset: 137, len: 1, neg: false },
    TableSlice { offset: 138, len: 1, neg: false },
    TableSlice { offset: 139, len: 1, neg: false },
    TableSlice { offset: 140, len: 1, neg: false },
    TableSlice { offset: 141, len: 1, neg: false },
    TableSlice { offset: 142, len: 1, neg: false },
    TableSlice { offset: 143, len: 1, neg: false },
    TableSlice { offset: 144, len: 1, neg: false },
    TableSlice { offset: 145, len: 1, neg: false },
    TableSlice { offset: 146, len: 1, neg: false },
    TableSlice { offset: 147, len: 1, neg: false },
    TableSlice { offset: 148, len: 1, neg: false },
    TableSlice { offset: 149, len: 1, neg: false },
    TableSlice { offset: 150, len: 1, neg: false },
    TableSlice { offset: 151, len: 1, neg: false },
    TableSlice { offset: 152, len: 1, neg: false },
    TableSlice { offset: 153, len: 1, neg: false },
    TableSlice { offset: 154, len: 1, neg: false },
    TableSlice { offset: 155, len: 1, neg: false },
    TableSlice { offset: 156, len: 1, neg: false },
    TableSlice { offset: 157, len: 1, neg: false },
    TableSlice { offset: 158, len: 1, neg: false },
    TableSlice { offset: 159, len: 1, neg: false },
    TableSlice { offset: 160, len: 1, neg: false },
    TableSlice { offset: 161, len: 1, neg: false },
    TableSlice { offset: 162, len: 1, neg: false },
    TableSlice { offset: 163, len: 1, neg: false },
    TableSlice { offset: 164, len: 1, neg: false },
    TableSlice { offset: 165, len: 1, neg: false },
    TableSlice { offset: 166, len: 1, neg: false },
    TableSlice { offset: 167, len: 1, neg: false },
    TableSlice { offset: 168, len: 1, neg: false },
    TableSlice { offset: 169, len: 1, neg: false },
    TableSlice { offset: 170, len: 1, neg: false },
    TableSlice { offset: 171, len: 1, neg: false },
    TableSlice { offset: 172, len: 1, neg: false },
    TableSlice { offset: 173, len: 1, neg: false },
    TableSlice { offset: 174, len: 1, neg: false },
    TableSlice { offset: 175, len: 1, neg: false },
    TableSlice { offset: 176, len: 1, neg: false },
    TableSlice { offset: 177, len: 1, neg: false },
    TableSlice { offset: 178, len: 1, neg: false },
    TableSlice { offset: 179, len: 1, neg: false },
    TableSlice { offset: 180, len: 1, neg: false },
    TableSlice { offset: 181, len: 1, neg: false },
    TableSlice { offset: 182, len: 1, neg: false },
    TableSlice { offset: 183, len: 1, neg: false },
    TableSlice { offset: 184, len: 1, neg: false },
    TableSlice { offset: 185, len: 1, neg: false },
    TableSlice { offset: 186, len: 1, neg: false },
    TableSlice { offset: 187, len: 1, neg: false },
    TableSlice { offset: 188, len: 1, neg: false },
    TableSlice { offset: 189, len: 1, neg: false },
    TableSlice { offset: 190, len: 1, neg: false },
    TableSlice { offset: 191, len: 1, neg: false },
    TableSlice { offset: 192, len: 1, neg: false },
    TableSlice { offset: 193, len: 1, neg: false },
    TableSlice { offset: 194, len: 1, neg: false },
    TableSlice { offset: 195, len: 1, neg: false },
    TableSlice { offset: 196, len: 1, neg: false },
    TableSlice { offset: 197, len: 1, neg: false },
    TableSlice { offset: 198, len: 1, neg: false },
    TableSlice { offset: 199, len: 1, neg: false },
    TableSlice { offset: 200, len: 1, neg: false },
    TableSlice { offset: 201, len: 1, neg: false },
    TableSlice { offset: 202, len: 1, neg: false },
    TableSlice { offset: 203, len: 1, neg: false },
    TableSlice { offset: 204, len: 1, neg: false },
    TableSlice { offset: 205, len: 1, neg: false },
    TableSlice { offset: 206, len: 1, neg: false },
    TableSlice { offset: 207, len: 1, neg: false },
    TableSlice { offset: 208, len: 1, neg: false },
    TableSlice { offset: 209, len: 1, neg: false },
    TableSlice { offset: 210, len: 1, neg: false },
    TableSlice { offset: 211, len: 1, neg: false },
    TableSlice { offset: 212, len: 1, neg: false },
    TableSlice { offset: 213, len: 1, neg: false },
    TableSlice { offset: 214, len: 1, neg: false },
    TableSlice { offset: 215, len: 1, neg: false },
    TableSlice { offset: 216, len: 1, neg: false },
    TableSlice { offset: 217, len: 1, neg: false },
    TableSlice { offset: 218, len: 1, neg: false },
    TableSlice { offset: 219, len: 1, neg: false },
    TableSlice { offset: 220, len: 1, neg: false },
    TableSlice { offset: 221, len: 1, neg: false },
    TableSlice { offset: 222, len: 1, neg: false },
    TableSlice { offset: 223, len: 1, neg: false },
    TableSlice { offset: 224, len: 1, neg: false },
    TableSlice { offset: 225, len: 1, neg: false },
    TableSlice { offset: 226, len: 1, neg: false },
    TableSlice { offset: 227, len: 1, neg: false },
    TableSlice { offset: 228, len: 1, neg: false },
    TableSlice { offset: 229, len: 1, neg: false },
    TableSlice { offset: 230, len: 1, neg: false },
    TableSlice { offset: 231, len: 1, neg: false },
    TableSlice { offset: 232, len: 1, neg: false },
    TableSlice { offset: 233, len: 1, neg: false },
    TableSlice { offset: 234, len: 1, neg: false },
    TableSlice { offset: 235, len: 1, neg: false },
    TableSlice { offset: 236, len: 1, neg: false },
    TableSlice { offset: 237, len: 1, neg: false },
    TableSlice { offset: 238, len: 1, neg: false },
    TableSlice { offset: 239, len: 1, neg: false },
    TableSlice { offset: 240, len: 1, neg: false },
    TableSlice { offset: 241, len: 1, neg: false },
    TableSlice { offset: 242, len: 1, neg: false },
    TableSlice { offset: 243, len: 1, neg: false },
    TableSlice { offset: 244, len: 1, neg: false },
    TableSlice { offset: 245, len: 1, neg: false },
    TableSlice { offset: 246, len: 1, neg: false },
    TableSlice { offset: 247, len: 1, neg: false },
    TableSlice { offset: 248, len: 1, neg: false },
    TableSlice { offset: 249, len: 1, neg: false },
    TableSlice { offset: 250, len: 1, neg: false },
    TableSlice { offset: 251, len: 1, neg: false },
    TableSlice { offset: 252, len: 1, neg: false },
    TableSlice { offset: 253, len: 1, neg: false },
    TableSlice { offset: 254, len: 1, neg: false },
    TableSlice { offset: 255, len: 1, neg: false },
];

